use chrono::{DateTime, Local, NaiveDateTime, Utc};
use shared::format::{format_medium, parse_date_input, DateInput, INVALID_DATE};
use wasm_bindgen::{JsCast, JsValue};

/// Formats a date string in the viewer's local time.
pub fn format_date(input: &str) -> String {
    parse_date_input(input)
        .map(|parsed| format_medium(&to_local(parsed)))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Accepts whatever page scripts pass: a `Date`, epoch millis or a string.
pub fn format_js_date(value: &JsValue) -> String {
    if let Some(date) = value.dyn_ref::<js_sys::Date>() {
        return format_millis(date.get_time());
    }
    if let Some(millis) = value.as_f64() {
        return format_millis(millis);
    }
    match value.as_string() {
        Some(text) => format_date(&text),
        None => INVALID_DATE.to_string(),
    }
}

fn format_millis(millis: f64) -> String {
    if !millis.is_finite() {
        return INVALID_DATE.to_string();
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|dt| format_medium(&to_local(DateInput::Instant(dt))))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn to_local(input: DateInput) -> NaiveDateTime {
    match input {
        DateInput::Instant(dt) => dt.with_timezone(&Local).naive_local(),
        DateInput::Local(naive) => naive,
    }
}
