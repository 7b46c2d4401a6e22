use super::*;

// =============================================================
// validate_service_form
// =============================================================

#[test]
fn validate_service_form_trims_fields() {
    let fields = validate_service_form("  Acme ", " Haircut ", " Short back and sides ", " 2500 ").unwrap();
    assert_eq!(
        fields,
        ServiceFields {
            company_name: "Acme".to_owned(),
            name: "Haircut".to_owned(),
            description: "Short back and sides".to_owned(),
            price: 2500.0,
        }
    );
}

#[test]
fn validate_service_form_requires_text_fields() {
    assert_eq!(validate_service_form("", "Haircut", "desc", "10"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_service_form("Acme", "  ", "desc", "10"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_service_form("Acme", "Haircut", "", "10"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_service_form_checks_price() {
    assert_eq!(validate_service_form("Acme", "Haircut", "desc", ""), Err(INVALID_PRICE_MESSAGE));
    assert_eq!(validate_service_form("Acme", "Haircut", "desc", "-1"), Err(INVALID_PRICE_MESSAGE));
    assert_eq!(validate_service_form("Acme", "Haircut", "desc", "ten"), Err(INVALID_PRICE_MESSAGE));
    assert_eq!(validate_service_form("Acme", "Haircut", "desc", "0").map(|f| f.price), Ok(0.0));
}

#[test]
fn into_new_service_attaches_provider() {
    let fields = validate_service_form("Acme", "Haircut", "desc", "10").unwrap();
    let req = fields.into_new_service("p-1".to_owned());
    assert_eq!(req.provider_id, "p-1");
    assert_eq!(req.company_name, "Acme");
    assert_eq!(req.price, 10.0);
}

// =============================================================
// parse_slots
// =============================================================

#[test]
fn parse_slots_accepts_non_negative_integers() {
    assert_eq!(parse_slots("0"), Ok(0));
    assert_eq!(parse_slots(" 12 "), Ok(12));
}

#[test]
fn parse_slots_rejects_negatives_fractions_and_blanks() {
    assert_eq!(parse_slots("-3"), Err(INVALID_SLOTS_MESSAGE));
    assert_eq!(parse_slots("2.5"), Err(INVALID_SLOTS_MESSAGE));
    assert_eq!(parse_slots(""), Err(INVALID_SLOTS_MESSAGE));
}
