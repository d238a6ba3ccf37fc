//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO 8601 timestamp like `2026-03-14T09:30:00.000Z` as a short
/// date (`2026-03-14`). Values that do not look like a timestamp pass
/// through unchanged; timestamps are backend-owned display data, not
/// something worth failing a render over.
pub fn short_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date.to_owned(),
        _ => timestamp.to_owned(),
    }
}

/// Short date for an optional timestamp, empty when absent.
pub fn short_date_opt(timestamp: Option<&str>) -> String {
    timestamp.map(short_date).unwrap_or_default()
}
