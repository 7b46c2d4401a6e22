use super::*;

fn service(id: &str, name: &str, slots: i64) -> Service {
    Service {
        id: id.to_owned(),
        company_name: "Acme".to_owned(),
        name: name.to_owned(),
        description: String::new(),
        price: 100.0,
        available_slots: slots,
        provider_id: None,
    }
}

// =============================================================
// filter_services
// =============================================================

#[test]
fn filter_services_matches_name_case_insensitively() {
    let all = vec![service("1", "Haircut", 3), service("2", "Car Wash", 1), service("3", "Beard trim", 0)];
    let hits = filter_services(&all, "CUT");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn filter_services_blank_query_keeps_everything() {
    let all = vec![service("1", "Haircut", 3), service("2", "Car Wash", 1)];
    assert_eq!(filter_services(&all, "   ").len(), 2);
    assert_eq!(filter_services(&all, "").len(), 2);
}

#[test]
fn filter_services_ignores_company_and_description() {
    let all = vec![service("1", "Haircut", 3)];
    assert!(filter_services(&all, "acme").is_empty());
}

// =============================================================
// is_bookable
// =============================================================

#[test]
fn is_bookable_requires_open_slots() {
    assert!(is_bookable(&service("1", "Haircut", 2)));
    assert!(!is_bookable(&service("1", "Haircut", 0)));
    assert!(!is_bookable(&service("1", "Haircut", -1)));
}
