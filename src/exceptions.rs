use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::calendar::parse_day_first;
use crate::error::ScheduleError;
use crate::grid::{CellRef, SheetGrid};
use crate::layout::SheetLayout;

/// Read the vertical exception-date list into a deduplicated date set.
///
/// Scans one cell per row from the configured start cell and stops at the
/// first empty cell; the list has no declared length and gaps inside it
/// are not supported. Each cell is either a single day-first date or a
/// range (marked by a hyphen or "od", Polish for "from"), expanded
/// inclusively. Any unparseable cell fails the whole sheet with the cell's
/// A1 reference in the message.
pub fn extract_exception_dates(
    grid: &dyn SheetGrid,
    layout: &SheetLayout,
) -> Result<BTreeSet<NaiveDate>, ScheduleError> {
    let mut exceptions = BTreeSet::new();
    let mut row = layout.exception_first_row;
    loop {
        let cell = CellRef::new(row, layout.exception_col);
        let text = match grid.cell(cell.row, cell.col).map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => break,
        };
        if text.contains('-') || text.contains("od") {
            let (start, end) = parse_range(text).ok_or_else(|| invalid(grid, cell))?;
            let mut current = start;
            while current <= end {
                exceptions.insert(current);
                current = current + Duration::days(1);
            }
        } else {
            exceptions.insert(parse_day_first(text).ok_or_else(|| invalid(grid, cell))?);
        }
        row += 1;
    }
    Ok(exceptions)
}

/// Split a range cell into its start and end dates.
///
/// The delimiter is a character class: hyphen, whitespace, and the
/// letters `o` and `d`. That is deliberately not word-boundary matching
/// on "od" — it is the split the already-deployed worksheets were
/// authored against, and it is known to be fragile (any stray `o` or `d`
/// inside a date token splits it, so e.g. a spelled-out month name would
/// shatter). Changing it is a product decision, not a code cleanup.
/// A split that does not yield exactly two non-empty parts, or a part
/// that fails day-first parsing, rejects the cell.
fn parse_range(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = text
        .split(|c: char| c == '-' || c.is_whitespace() || c == 'o' || c == 'd')
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [start, end] => Some((parse_day_first(start)?, parse_day_first(end)?)),
        _ => None,
    }
}

fn invalid(grid: &dyn SheetGrid, cell: CellRef) -> ScheduleError {
    ScheduleError::InvalidExceptionDate {
        sheet: grid.name().to_string(),
        cell: cell.a1(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn exception_grid(cells: &[&str]) -> MemoryGrid {
        let mut grid = MemoryGrid::new("Court 1");
        for (i, text) in cells.iter().enumerate() {
            grid.set(21 + i as u32, 9, *text);
        }
        grid
    }

    #[test]
    fn test_single_date_cell() {
        let grid = exception_grid(&["15/03/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(set, [date(2024, 3, 15)].into());
    }

    #[test]
    fn test_hyphen_range_expands_inclusively() {
        let grid = exception_grid(&["01/03/2024-05/03/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(set.len(), 5);
        assert!(set.contains(&date(2024, 3, 1)));
        assert!(set.contains(&date(2024, 3, 5)));
    }

    #[test]
    fn test_spaced_hyphen_range() {
        let grid = exception_grid(&["01/03/2024 - 03/03/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_od_marked_range() {
        let grid = exception_grid(&["od 10/04/2024 do 12/04/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(
            set,
            [date(2024, 4, 10), date(2024, 4, 11), date(2024, 4, 12)].into()
        );
    }

    #[test]
    fn test_scan_stops_at_first_empty_cell() {
        let mut grid = exception_grid(&["15/03/2024"]);
        // Row 22 stays empty; row 23 must never be read.
        grid.set(23, 9, "garbage");
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let grid = exception_grid(&["15/03/2024", "14/03/2024-16/03/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let grid = MemoryGrid::new("Court 1");
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unparseable_single_date_names_cell() {
        let grid = exception_grid(&["15/03/2024", "not a date x"]);
        let err = extract_exception_dates(&grid, &SheetLayout::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidExceptionDate {
                sheet: "Court 1".to_string(),
                cell: "I22".to_string(),
            }
        );
    }

    #[test]
    fn test_range_with_bad_part_fails() {
        let grid = exception_grid(&["01/03/2024-garbage"]);
        let err = extract_exception_dates(&grid, &SheetLayout::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidExceptionDate {
                sheet: "Court 1".to_string(),
                cell: "I21".to_string(),
            }
        );
    }

    #[test]
    fn test_range_with_three_parts_fails() {
        let grid = exception_grid(&["01/03/2024-05/03/2024-07/03/2024"]);
        assert!(extract_exception_dates(&grid, &SheetLayout::default()).is_err());
    }

    #[test]
    fn test_inverted_range_adds_nothing() {
        let grid = exception_grid(&["05/03/2024-01/03/2024"]);
        let set = extract_exception_dates(&grid, &SheetLayout::default()).unwrap();
        assert!(set.is_empty());
    }
}
