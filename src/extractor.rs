use crate::booking::extract_booking_time;
use crate::calendar::{exclude_exception_dates, expand_period};
use crate::combine::generate_rows;
use crate::error::ScheduleError;
use crate::exceptions::extract_exception_dates;
use crate::grid::{CellRef, SheetGrid};
use crate::layout::SheetLayout;
use crate::types::{BookingCutoffs, SheetOutcome, SheetSchedule};
use crate::validator::check_sheet;
use crate::weekly::{discover_slot_count, extract_week_slots};

/// Run the full extraction pipeline over one sheet.
///
/// Validation gate first, then booking cutoffs, calendar expansion, the
/// weekly slot table, and the exception list; exceptions are subtracted
/// from the calendar before the cross-join produces the output rows. Any
/// failure aborts this sheet with no partial output; the error carries
/// everything the caller needs to report it.
pub fn extract_sheet(
    grid: &dyn SheetGrid,
    layout: &SheetLayout,
) -> Result<SheetSchedule, ScheduleError> {
    let header = check_sheet(grid, layout)?;

    let cutoffs = BookingCutoffs {
        weekday: booking_cutoff(grid, layout.weekday_booking)?,
        weekend: booking_cutoff(grid, layout.weekend_booking)?,
    };

    let calendar = expand_period(header.from, header.till);
    log::debug!(
        "sheet '{}': court {}, {} calendar days",
        grid.name(),
        header.court_id,
        calendar.len()
    );

    let slot_count = discover_slot_count(grid, layout);
    let slots = extract_week_slots(grid, layout, slot_count)?;
    let exceptions = extract_exception_dates(grid, layout)?;
    let calendar = exclude_exception_dates(calendar, &exceptions);

    let rows = generate_rows(&calendar, &slots, &cutoffs);

    Ok(SheetSchedule {
        label: grid
            .cell(layout.label.row, layout.label.col)
            .unwrap_or_default()
            .trim()
            .to_string(),
        court_id: header.court_id,
        from: header.from,
        till: header.till,
        rows,
    })
}

fn booking_cutoff(grid: &dyn SheetGrid, cell: CellRef) -> Result<String, ScheduleError> {
    grid.cell(cell.row, cell.col)
        .and_then(extract_booking_time)
        .ok_or_else(|| ScheduleError::InvalidBookingTime {
            sheet: grid.name().to_string(),
        })
}

/// Process a workbook's sheets in order, one outcome per sheet.
///
/// A failing sheet is reported in its outcome and the run continues; no
/// sheet can abort the workbook. This is the structured replacement for
/// rendering a running log: the caller decides how outcomes are shown.
pub fn process_sheets<'a, I>(grids: I, layout: &SheetLayout) -> Vec<SheetOutcome>
where
    I: IntoIterator<Item = &'a dyn SheetGrid>,
{
    grids
        .into_iter()
        .map(|grid| {
            let result = extract_sheet(grid, layout);
            if let Err(err) = &result {
                log::warn!("skipping sheet '{}': {}", grid.name(), err);
            }
            SheetOutcome {
                sheet: grid.name().to_string(),
                result,
            }
        })
        .collect()
}
