use serde::Serialize;
use thiserror::Error;

/// Sheet-scoped extraction failures.
///
/// Every variant names the offending sheet so the caller can render a
/// per-sheet report; none of these is fatal to the workbook run. The
/// messages match what the reporting surface shows to the worksheet
/// authors, so they stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScheduleError {
    #[error("Invalid Court ID on tab {sheet}")]
    InvalidCourtId { sheet: String },

    #[error("Invalid From date on tab {sheet}")]
    InvalidFromDate { sheet: String },

    #[error("Invalid Till date on tab {sheet}")]
    InvalidTillDate { sheet: String },

    #[error("Invalid booking time on tab {sheet}")]
    InvalidBookingTime { sheet: String },

    #[error("Invalid week day hours on tab {sheet}")]
    InvalidWeeklyHours { sheet: String },

    /// `cell` is the A1 reference of the unparseable exception-date cell.
    #[error("Invalid exception date on tab {sheet}, cell {cell}")]
    InvalidExceptionDate { sheet: String, cell: String },
}

impl ScheduleError {
    /// The sheet the failure belongs to.
    pub fn sheet(&self) -> &str {
        match self {
            ScheduleError::InvalidCourtId { sheet }
            | ScheduleError::InvalidFromDate { sheet }
            | ScheduleError::InvalidTillDate { sheet }
            | ScheduleError::InvalidBookingTime { sheet }
            | ScheduleError::InvalidWeeklyHours { sheet }
            | ScheduleError::InvalidExceptionDate { sheet, .. } => sheet,
        }
    }
}
