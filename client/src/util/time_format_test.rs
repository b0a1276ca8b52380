use super::*;

#[test]
fn duration_text_hours_and_minutes() {
    assert_eq!(
        duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T11:30:00Z")),
        "1h 30m"
    );
}

#[test]
fn duration_text_whole_hours() {
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T12:00:00Z")), "2h");
}

#[test]
fn duration_text_under_an_hour() {
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T10:45:00Z")), "45m");
}

#[test]
fn duration_text_rounds_to_nearest_minute() {
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T10:59:40Z")), "1h");
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T10:10:29Z")), "10m");
}

#[test]
fn duration_text_equal_or_inverted_is_dash() {
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T10:00:00Z")), "-");
    assert_eq!(duration_text(Some("2024-01-01T11:30:00Z"), Some("2024-01-01T10:00:00Z")), "-");
}

#[test]
fn duration_text_missing_or_invalid_is_dash() {
    assert_eq!(duration_text(Some("2024-01-01T10:00:00Z"), None), "-");
    assert_eq!(duration_text(None, Some("2024-01-01T10:00:00Z")), "-");
    assert_eq!(duration_text(Some("yesterday"), Some("2024-01-01T10:00:00Z")), "-");
}

#[test]
fn duration_text_respects_offsets() {
    assert_eq!(
        duration_text(Some("2024-01-01T10:00:00+05:30"), Some("2024-01-01T05:00:00Z")),
        "30m"
    );
}

#[test]
fn parse_timestamp_accepts_naive_local_format() {
    let ts = parse_timestamp("2024-03-05T08:15:00").unwrap();
    assert_eq!(ts.offset(), UtcOffset::UTC);
    assert_eq!(ts.hour(), 8);
    assert!(parse_timestamp("2024-03-05T08:15:00.250").is_some());
}

#[test]
fn format_start_time_renders_utc() {
    assert_eq!(format_start_time("2024-01-01T10:00:00+02:00"), "2024-01-01 08:00");
    assert_eq!(format_start_time("not a date"), "not a date");
}
