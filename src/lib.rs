//! Schedule extraction pipeline for fixed-layout court booking worksheets.
//!
//! One worksheet per court describes a booking period, latest-booking
//! times, a weekly time-slot table and a list of exception dates. This
//! crate turns that grid into a flat, ordered sequence of bookable
//! time-slot rows ready for downstream import:
//! - Precondition validation (court id, period bounds)
//! - Calendar expansion over the inclusive date period
//! - Weekly slot-table extraction with a variable slot-column count
//! - Free-text exception-date parsing (singles and ranges) and exclusion
//! - Booking-cutoff normalization and the final cross-join
//!
//! The crate ends at the [`SheetGrid`] trait on the way in and
//! [`ScheduleRow`] values on the way out; opening workbook files and
//! writing tabular output belong to the embedding application. Failures
//! are per sheet and structured ([`ScheduleError`]); a workbook run via
//! [`process_sheets`] never lets one bad sheet stop the rest.

pub mod booking;
pub mod calendar;
pub mod combine;
pub mod error;
pub mod exceptions;
pub mod extractor;
pub mod grid;
pub mod layout;
pub mod types;
pub mod validator;
pub mod weekly;

// Re-export commonly used types and functions
pub use error::ScheduleError;
pub use extractor::{extract_sheet, process_sheets};
pub use grid::{CellRef, MemoryGrid, SheetGrid};
pub use layout::SheetLayout;
pub use types::{
    BookingCutoffs, CalendarDay, ScheduleRow, SheetOutcome, SheetSchedule, TimeSlot,
    ValidationResult,
};
pub use validator::validate_sheet;
