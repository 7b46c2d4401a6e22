use super::*;

#[test]
fn validate_date_input_accepts_picker_value() {
    assert_eq!(validate_date_input(" 2024-11-20 "), Ok("2024-11-20".to_owned()));
}

#[test]
fn validate_date_input_rejects_empty_and_garbage() {
    assert_eq!(validate_date_input(""), Err(MISSING_DATE_MESSAGE));
    assert_eq!(validate_date_input("   "), Err(MISSING_DATE_MESSAGE));
    assert_eq!(validate_date_input("tomorrow"), Err(MISSING_DATE_MESSAGE));
    assert_eq!(validate_date_input("2024-02-30"), Err(MISSING_DATE_MESSAGE));
}

#[test]
fn format_date_handles_api_timestamps() {
    assert_eq!(format_date("2024-11-20T00:00:00.000Z"), "20/11/2024");
    assert_eq!(format_date("2024-11-20"), "20/11/2024");
}

#[test]
fn format_date_placeholder_and_passthrough() {
    assert_eq!(format_date(""), "N/A");
    assert_eq!(format_date("next week"), "next week");
}

#[test]
fn format_date_time_keeps_time_of_day() {
    assert_eq!(format_date_time("2024-11-14T10:05:00Z"), "14/11/2024 10:05");
    assert_eq!(format_date_time("2024-11-14"), "14/11/2024");
}
