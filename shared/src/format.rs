use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// A parsed date input, before conversion to the viewer's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// An absolute instant (offset given, date-only, or epoch millis).
    Instant(DateTime<Utc>),
    /// Wall-clock time with no offset; interpreted in local time.
    Local(NaiveDateTime),
}

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses the date shapes page scripts hand us. Date-only strings are UTC
/// midnight and offset-less date-times are local, as in browsers.
pub fn parse_date_input(input: &str) -> Option<DateInput> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(DateInput::Instant(dt.with_timezone(&Utc)));
    }

    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(DateInput::Local(naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(DateInput::Instant(Utc.from_utc_datetime(&midnight)));
    }

    input
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(DateInput::Instant)
}

/// en-US medium date with two-digit hour and minute, e.g.
/// `Jan 5, 2024, 03:07 PM`.
pub fn format_medium(dt: &NaiveDateTime) -> String {
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}
