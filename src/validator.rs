use chrono::NaiveDate;

use crate::calendar::parse_day_first;
use crate::error::ScheduleError;
use crate::grid::SheetGrid;
use crate::layout::SheetLayout;
use crate::types::ValidationResult;

/// The validated header cells every extraction starts from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SheetHeader {
    pub(crate) court_id: i64,
    pub(crate) from: NaiveDate,
    pub(crate) till: NaiveDate,
}

/// Precondition gate for a sheet. Never errors: failure comes back as a
/// `ValidationResult` with the reason, so a workbook run can report it and
/// move on. Callers must skip the sheet entirely when this fails.
pub fn validate_sheet(grid: &dyn SheetGrid, layout: &SheetLayout) -> ValidationResult {
    match check_sheet(grid, layout) {
        Ok(_) => ValidationResult::pass(),
        Err(err) => ValidationResult::fail(err.to_string()),
    }
}

/// Checks run in order, short-circuiting on the first failure:
/// court id, from date, till date.
pub(crate) fn check_sheet(
    grid: &dyn SheetGrid,
    layout: &SheetLayout,
) -> Result<SheetHeader, ScheduleError> {
    let sheet = grid.name();

    let court_id = parse_court_id(grid.cell(layout.court_id.row, layout.court_id.col))
        .ok_or_else(|| ScheduleError::InvalidCourtId {
            sheet: sheet.to_string(),
        })?;

    let from = grid
        .cell(layout.from_date.row, layout.from_date.col)
        .and_then(parse_day_first)
        .ok_or_else(|| ScheduleError::InvalidFromDate {
            sheet: sheet.to_string(),
        })?;

    let till = grid
        .cell(layout.till_date.row, layout.till_date.col)
        .and_then(parse_day_first)
        .ok_or_else(|| ScheduleError::InvalidTillDate {
            sheet: sheet.to_string(),
        })?;

    Ok(SheetHeader {
        court_id,
        from,
        till,
    })
}

/// The court id must be a positive integer. Numeric spreadsheet cells
/// often surface as "3.0", so an integral positive float rendering is
/// accepted too.
fn parse_court_id(text: Option<&str>) -> Option<i64> {
    let text = text?.trim();
    if let Ok(n) = text.parse::<i64>() {
        return (n > 0).then_some(n);
    }
    let f = text.parse::<f64>().ok()?;
    (f > 0.0 && f.fract() == 0.0).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;

    fn sheet_with_header(court_id: &str, from: &str, till: &str) -> MemoryGrid {
        let mut grid = MemoryGrid::new("Court 1");
        grid.set(3, 3, court_id);
        grid.set(5, 4, from);
        grid.set(5, 6, till);
        grid
    }

    #[test]
    fn test_valid_header_passes() {
        let grid = sheet_with_header("3", "01/01/2024", "31/01/2024");
        let result = validate_sheet(&grid, &SheetLayout::default());
        assert!(result.is_valid);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn test_integral_float_court_id_accepted() {
        let grid = sheet_with_header("3.0", "01/01/2024", "31/01/2024");
        assert!(validate_sheet(&grid, &SheetLayout::default()).is_valid);
    }

    #[test]
    fn test_zero_court_id_fails() {
        let grid = sheet_with_header("0", "01/01/2024", "31/01/2024");
        let result = validate_sheet(&grid, &SheetLayout::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("Invalid Court ID on tab Court 1")
        );
    }

    #[test]
    fn test_non_numeric_court_id_fails() {
        let grid = sheet_with_header("three", "01/01/2024", "31/01/2024");
        assert!(!validate_sheet(&grid, &SheetLayout::default()).is_valid);
    }

    #[test]
    fn test_missing_court_id_fails() {
        let mut grid = MemoryGrid::new("Court 1");
        grid.set(5, 4, "01/01/2024");
        grid.set(5, 6, "31/01/2024");
        assert!(!validate_sheet(&grid, &SheetLayout::default()).is_valid);
    }

    #[test]
    fn test_bad_from_date_fails_before_till() {
        // Both dates invalid; the from-date check fires first.
        let grid = sheet_with_header("3", "garbage", "also garbage");
        let result = validate_sheet(&grid, &SheetLayout::default());
        assert_eq!(
            result.reason.as_deref(),
            Some("Invalid From date on tab Court 1")
        );
    }

    #[test]
    fn test_bad_till_date_fails() {
        let grid = sheet_with_header("3", "01/01/2024", "2024/01/31");
        let result = validate_sheet(&grid, &SheetLayout::default());
        assert_eq!(
            result.reason.as_deref(),
            Some("Invalid Till date on tab Court 1")
        );
    }
}
