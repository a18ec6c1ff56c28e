use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One day of the expanded booking period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub weekday: Weekday,
    pub date: NaiveDate,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        CalendarDay {
            weekday: date.weekday(),
            date,
        }
    }

    /// Full English day name, the form the weekly table uses.
    pub fn day_name(&self) -> &'static str {
        day_name(self.weekday)
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Full English name for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One bookable (start, end) interval read from the weekly table.
///
/// `day` is the day-name cell text as authored in the sheet; matching
/// against calendar days is case-insensitive. A weekday can carry several
/// slots (one per populated column pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// Latest booking times, already normalized to bare `H:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCutoffs {
    /// Applies Monday through Friday.
    pub weekday: String,
    /// Applies Saturday and Sunday.
    pub weekend: String,
}

/// One output record, one bookable slot on one calendar date.
///
/// Serde renames produce the downstream-import column headers verbatim
/// (including the comma in "Rate, PLN"), so any serde-based tabular writer
/// emits the expected file without further mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Latest Booking Date")]
    pub latest_booking_date: String,
    #[serde(rename = "Latest Booking Time")]
    pub latest_booking_time: String,
    #[serde(rename = "Rate, PLN")]
    pub rate_pln: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "User Id")]
    pub user_id: String,
    #[serde(rename = "Commission enabled")]
    pub commission_enabled: String,
    #[serde(rename = "Commission in percent")]
    pub commission_in_percent: String,
    #[serde(rename = "Commission")]
    pub commission: String,
}

impl ScheduleRow {
    const RATE: &'static str = "-";
    const DESCRIPTION: &'static str = "Management";

    /// Build a row for one (date, slot) match. The booking date always
    /// equals the slot date; rate and description are fixed by the import
    /// format, the commission columns stay blank.
    pub fn new(date: &str, start_time: &str, end_time: &str, booking_time: &str) -> Self {
        ScheduleRow {
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            latest_booking_date: date.to_string(),
            latest_booking_time: booking_time.to_string(),
            rate_pln: Self::RATE.to_string(),
            description: Self::DESCRIPTION.to_string(),
            user_id: String::new(),
            commission_enabled: String::new(),
            commission_in_percent: String::new(),
            commission: String::new(),
        }
    }
}

/// Outcome of the precondition gate; failure is reported, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        ValidationResult {
            is_valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Everything a successful sheet extraction yields: the generated rows
/// plus the header metadata an external writer needs for output naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSchedule {
    pub label: String,
    pub court_id: i64,
    pub from: NaiveDate,
    pub till: NaiveDate,
    pub rows: Vec<ScheduleRow>,
}

/// Per-sheet result of a workbook run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetOutcome {
    pub sheet: String,
    pub result: Result<SheetSchedule, ScheduleError>,
}
