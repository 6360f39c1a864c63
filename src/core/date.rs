//! Display dates for the date pickers: `dd/MM/yyyy`, Brazilian Portuguese.

use chrono::{Datelike, Locale, NaiveDate, Weekday};

use super::error::IntakeError;

/// `strftime` pattern shown in the date pickers.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Locale for month and weekday names.
pub const DISPLAY_LOCALE: Locale = Locale::pt_BR;

/// Format a date as `dd/MM/yyyy`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a `dd/MM/yyyy` date typed into a picker.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, IntakeError> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT)
        .map_err(|e| IntakeError::Date(format!("'{value}' is not a dd/mm/yyyy date: {e}")))
}

/// Full month name for `month` (1-12), `None` out of range.
pub fn month_name(month: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(2000, month, 1)?;
    Some(date.format_localized("%B", DISPLAY_LOCALE).to_string())
}

/// Full weekday name.
pub fn weekday_name(weekday: Weekday) -> String {
    NaiveDate::from_weekday_of_month_opt(2024, 1, weekday, 1)
        .map(|d| d.format_localized("%A", DISPLAY_LOCALE).to_string())
        .unwrap_or_default()
}

/// Header line for a picker month page, e.g. "março 2024".
pub fn month_caption(date: NaiveDate) -> String {
    match month_name(date.month()) {
        Some(name) => format!("{name} {}", date.year()),
        None => date.year().to_string(),
    }
}
