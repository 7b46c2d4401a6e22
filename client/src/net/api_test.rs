use super::*;

const BASE: &str = "http://localhost:3000/app/bulir";

// =============================================================
// endpoint_from
// =============================================================

#[test]
fn endpoint_from_appends_segments() {
    assert_eq!(endpoint_from(BASE, &["login"]).unwrap(), "http://localhost:3000/app/bulir/login");
    assert_eq!(
        endpoint_from(BASE, &["booking", "b1", "update-date"]).unwrap(),
        "http://localhost:3000/app/bulir/booking/b1/update-date"
    );
}

#[test]
fn endpoint_from_tolerates_trailing_slash_on_base() {
    assert_eq!(
        endpoint_from("http://localhost:3000/app/bulir/", &["getAllServices"]).unwrap(),
        "http://localhost:3000/app/bulir/getAllServices"
    );
}

#[test]
fn endpoint_from_encodes_path_segments() {
    assert_eq!(
        endpoint_from(BASE, &["clientHistory", "a b/c"]).unwrap(),
        "http://localhost:3000/app/bulir/clientHistory/a%20b%2Fc"
    );
}

#[test]
fn endpoint_from_rejects_relative_base() {
    assert!(matches!(endpoint_from("not a url", &["login"]), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn endpoint_from_rejects_cannot_be_a_base_url() {
    assert!(matches!(endpoint_from("mailto:ops@example.com", &["login"]), Err(ApiError::InvalidUrl(_))));
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_body_parses_login_reply() {
    let reply: LoginResponse = decode_body(
        r#"{"token":"abc","user":{"_id":"u1","name":"Ana","nif":"123456789","email":"a@b.com","role":"cliente","balance":0}}"#,
    )
    .unwrap();
    assert_eq!(reply.token, "abc");
    assert_eq!(reply.user.id, "u1");
}

#[test]
fn decode_body_reports_decode_error() {
    let result = decode_body::<LoginResponse>(r#"{"token":"abc"}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_services_unwraps_envelope() {
    let services = decode_services(
        r#"{"services":[{"_id":"s1","companyname":"Acme","name":"Haircut","description":"","price":10,"availableSlots":3}]}"#,
    )
    .unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].available_slots, 3);
}

#[test]
fn decode_bookings_rejects_non_array_payload() {
    let result = decode_bookings::<ProviderBooking>(r#"{"bookings":"none"}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_bookings_unwraps_provider_history() {
    let bookings = decode_bookings::<ProviderBooking>(
        r#"{"bookings":[{"_id":"b1","clientId":"u1","serviceId":"s1","providerId":"p1","reservationDate":"2024-11-20","createdAt":"2024-11-14T10:00:00Z"}]}"#,
    )
    .unwrap();
    assert_eq!(bookings[0].service_id, "s1");
}
