use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_PLACEHOLDER: &str = "N/A";
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DESCRIPTION_LIMIT: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Renders an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset.
///
/// Absent or empty input gives [`DATE_PLACEHOLDER`]; input that does not
/// parse is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return DATE_PLACEHOLDER.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return dt.format(DATE_FORMAT).to_string();
    }

    raw.to_string()
}

/// Keeps the first [`DESCRIPTION_LIMIT`] characters, adding [`ELLIPSIS`]
/// only when something was cut.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}
