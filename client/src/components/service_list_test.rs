use super::*;

#[test]
fn edit_draft_copies_service_fields_as_text() {
    let service = Service {
        id: "s-1".to_owned(),
        company_name: "Acme".to_owned(),
        name: "Haircut".to_owned(),
        description: "Short".to_owned(),
        price: 1500.5,
        available_slots: 4,
        provider_id: Some("p-1".to_owned()),
    };
    let draft = EditDraft::from(&service);
    assert_eq!(draft.id, "s-1");
    assert_eq!(draft.company_name, "Acme");
    assert_eq!(draft.price, "1500.5");
    assert_eq!(draft.slots, "4");
}

#[test]
fn edit_draft_round_trips_through_validation() {
    let service = Service {
        id: "s-1".to_owned(),
        company_name: "Acme".to_owned(),
        name: "Haircut".to_owned(),
        description: "Short".to_owned(),
        price: 2000.0,
        available_slots: 0,
        provider_id: None,
    };
    let draft = EditDraft::from(&service);
    let fields = validate_service_form(&draft.company_name, &draft.name, &draft.description, &draft.price).unwrap();
    assert_eq!(fields.price, 2000.0);
    assert_eq!(parse_slots(&draft.slots), Ok(0));
}
