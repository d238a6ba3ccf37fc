use super::*;

#[test]
fn iso_timestamps_truncate_to_date() {
    assert_eq!(short_date("2026-03-14T09:30:00.000Z"), "2026-03-14");
    assert_eq!(short_date("2026-03-14T09:30:00+06:00"), "2026-03-14");
}

#[test]
fn non_timestamps_pass_through() {
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date(""), "");
}

#[test]
fn optional_timestamps_default_to_empty() {
    assert_eq!(short_date_opt(Some("2026-01-02T00:00:00Z")), "2026-01-02");
    assert_eq!(short_date_opt(None), "");
}
