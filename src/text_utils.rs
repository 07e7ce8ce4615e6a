use chrono::{Datelike, NaiveDate};

/// Parses a display-formatted date like "November 25, 2025".
/// This is the only date format the catalog accepts.
pub fn parse_display_date(buf: &str) -> Result<NaiveDate, String> {
    match NaiveDate::parse_from_str(buf.trim(), "%B %d, %Y") {
        Ok(date) => Ok(date),
        Err(_) => Err(format!("Unable to parse date {}", buf)),
    }
}

/// Departure-board short form: ("NOV", 25).
pub fn format_date_short(date: &NaiveDate) -> (String, u32) {
    let month = date.format("%b").to_string().to_uppercase();
    (month, date.day())
}

/// Ids double as URL path segments, so only [A-Za-z0-9_-] is allowed.
pub fn is_url_safe(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
