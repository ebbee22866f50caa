use chrono::{Local, NaiveDate, NaiveDateTime};

/// Storage format for event dates. Fixed-width, so lexicographic order in
/// SQLite matches chronological order.
pub const EVENT_DATE_FMT: &str = "%Y-%m-%d %H:%M";

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse an event date from user input.
///
/// Accepts "YYYY-MM-DD HH:MM", the HTML-ish "YYYY-MM-DDTHH:MM", or a bare
/// date (midnight is assumed).
pub fn parse_event_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, EVENT_DATE_FMT) {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

pub fn fmt_event_date(dt: &NaiveDateTime) -> String {
    dt.format(EVENT_DATE_FMT).to_string()
}

/// Timestamp used for `created_at` columns, local time in ISO 8601.
pub fn created_at_now() -> String {
    Local::now().to_rfc3339()
}
