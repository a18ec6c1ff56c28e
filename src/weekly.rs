use crate::error::ScheduleError;
use crate::grid::SheetGrid;
use crate::layout::SheetLayout;
use crate::types::TimeSlot;

/// Count the slot column-pairs declared by the weekly table's header row.
///
/// Walks the header row two columns at a time from the first slot column
/// and stops at the first pair that does not read "start time"/"end time"
/// (case-insensitive). Columns past that point are never scanned, whatever
/// they contain.
pub fn discover_slot_count(grid: &dyn SheetGrid, layout: &SheetLayout) -> u32 {
    let mut slots = 0;
    let mut col = layout.slot_first_col;
    loop {
        let header_start = grid.cell(layout.slot_header_row, col);
        let header_end = grid.cell(layout.slot_header_row, col + 1);
        match (header_start, header_end) {
            (Some(start), Some(end))
                if start.trim().eq_ignore_ascii_case("start time")
                    && end.trim().eq_ignore_ascii_case("end time") =>
            {
                slots += 1;
                col += 2;
            }
            _ => break,
        }
    }
    slots
}

/// Read every populated (start, end) pair of the seven weekly rows.
///
/// Slots come out row-major: Monday's row first, slot columns left to
/// right. A pair with either cell empty is skipped (a day may use fewer
/// slots than the table declares). A populated pair on a row whose
/// day-name cell is empty means the table structure is off, which fails
/// the whole sheet; partial weekly data is never returned.
pub fn extract_week_slots(
    grid: &dyn SheetGrid,
    layout: &SheetLayout,
    slot_count: u32,
) -> Result<Vec<TimeSlot>, ScheduleError> {
    let mut slots = Vec::new();
    for row in layout.week_first_row..layout.week_first_row + SheetLayout::WEEK_ROWS {
        let day = grid
            .cell(row, layout.day_name_col)
            .map(str::trim)
            .filter(|day| !day.is_empty());
        for slot in 0..slot_count {
            let col = layout.slot_first_col + slot * 2;
            let start_time = non_empty(grid.cell(row, col));
            let end_time = non_empty(grid.cell(row, col + 1));
            if let (Some(start_time), Some(end_time)) = (start_time, end_time) {
                let day = day.ok_or_else(|| ScheduleError::InvalidWeeklyHours {
                    sheet: grid.name().to_string(),
                })?;
                slots.push(TimeSlot {
                    day: day.to_string(),
                    start_time: start_time.to_string(),
                    end_time: end_time.to_string(),
                });
            }
        }
    }
    log::debug!(
        "sheet '{}': {} weekly slot entries across {} slot columns",
        grid.name(),
        slots.len(),
        slot_count
    );
    Ok(slots)
}

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|text| !text.is_empty())
}
