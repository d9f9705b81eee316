use chrono::{Datelike, Local, NaiveDate};

use crate::error::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date as an interaction date string (`YYYY-MM-DD`).
pub fn today_date_string() -> String {
    today_local().format(DATE_FORMAT).to_string()
}

pub fn parse_interaction_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Renders an interaction date as `M/D/YYYY`. Dates are free text, so a
/// value that is not `YYYY-MM-DD` is shown as entered.
pub fn format_interaction_date(raw: &str) -> String {
    match parse_interaction_date(raw) {
        Ok(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Err(_) => raw.to_string(),
    }
}
