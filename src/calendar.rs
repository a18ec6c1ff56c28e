use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::types::CalendarDay;

/// Formats accepted for worksheet dates, day-first throughout.
///
/// Two-digit-year formats come first: `%y` consumes exactly two digits so
/// a four-digit year falls through to the `%Y` entries, while `%Y` would
/// happily read "24" as the year 24 and shadow the `%y` entries entirely.
const DATE_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Parse a date cell day-first. Returns `None` when no accepted format
/// matches.
pub fn parse_day_first(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Render a date the way the output rows and exception sets carry it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Expand `[from, till]` inclusive into one `CalendarDay` per date.
///
/// The result is contiguous and strictly increasing by one day; an
/// inverted range yields an empty calendar. No length cap is applied here.
pub fn expand_period(from: NaiveDate, till: NaiveDate) -> Vec<CalendarDay> {
    let mut days = Vec::new();
    let mut current = from;
    while current <= till {
        days.push(CalendarDay::new(current));
        current = current + Duration::days(1);
    }
    days
}

/// Drop every calendar day whose date is in the exception set.
pub fn exclude_exception_dates(
    days: Vec<CalendarDay>,
    exceptions: &BTreeSet<NaiveDate>,
) -> Vec<CalendarDay> {
    days.into_iter()
        .filter(|day| !exceptions.contains(&day.date))
        .collect()
}
