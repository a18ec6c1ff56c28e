use serde::{Deserialize, Serialize};

use crate::grid::CellRef;

/// Every fixed cell coordinate the extraction pipeline reads.
///
/// The worksheet layout is fixed by convention but the convention lives
/// here, in one place, instead of as scattered literals. `Default` is the
/// conventional owner-worksheet layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Facility label used for output naming (C2).
    pub label: CellRef,
    /// Court identifier, positive integer (C3).
    pub court_id: CellRef,
    /// Period start date, day-first (D5).
    pub from_date: CellRef,
    /// Period end date, day-first (F5).
    pub till_date: CellRef,
    /// Free text holding the Mon-Fri latest booking time (C6).
    pub weekday_booking: CellRef,
    /// Free text holding the Sat-Sun latest booking time (C7).
    pub weekend_booking: CellRef,
    /// Header row of the weekly table holding "Start Time"/"End Time" pairs.
    pub slot_header_row: u32,
    /// Column holding the day names (Monday..Sunday) of the weekly table.
    pub day_name_col: u32,
    /// First column of the first slot pair.
    pub slot_first_col: u32,
    /// First data row of the weekly table (Monday); six more rows follow.
    pub week_first_row: u32,
    /// Column of the vertical exception-date list.
    pub exception_col: u32,
    /// First row of the exception-date list.
    pub exception_first_row: u32,
}

impl SheetLayout {
    /// The weekly table always spans Monday through Sunday.
    pub const WEEK_ROWS: u32 = 7;
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout {
            label: CellRef::new(2, 3),
            court_id: CellRef::new(3, 3),
            from_date: CellRef::new(5, 4),
            till_date: CellRef::new(5, 6),
            weekday_booking: CellRef::new(6, 3),
            weekend_booking: CellRef::new(7, 3),
            slot_header_row: 10,
            day_name_col: 2,
            slot_first_col: 3,
            week_first_row: 11,
            exception_col: 9,
            exception_first_row: 21,
        }
    }
}
