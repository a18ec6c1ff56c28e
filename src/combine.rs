use crate::calendar::format_date;
use crate::types::{BookingCutoffs, CalendarDay, ScheduleRow, TimeSlot};

/// Cross-join the filtered calendar against the weekly slots.
///
/// Every (day, slot) pair whose weekday names match case-insensitively
/// becomes one row; Saturdays and Sundays take the weekend cutoff, every
/// other day the weekday one. Rows come out grouped by calendar day in
/// date order and, within a day, in weekly-table discovery order. Nothing
/// is deduplicated: a weekday listed twice in the table yields its rows
/// twice.
pub fn generate_rows(
    days: &[CalendarDay],
    slots: &[TimeSlot],
    cutoffs: &BookingCutoffs,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();
    for day in days {
        let day_name = day.day_name();
        let booking_time = if day.is_weekend() {
            &cutoffs.weekend
        } else {
            &cutoffs.weekday
        };
        for slot in slots {
            if slot.day.eq_ignore_ascii_case(day_name) {
                rows.push(ScheduleRow::new(
                    &format_date(day.date),
                    &slot.start_time,
                    &slot.end_time,
                    booking_time,
                ));
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn cutoffs() -> BookingCutoffs {
        BookingCutoffs {
            weekday: "6:00".to_string(),
            weekend: "12:00".to_string(),
        }
    }

    #[test]
    fn test_weekend_day_takes_weekend_cutoff() {
        // 2024-01-06 is a Saturday, 2024-01-08 a Monday.
        let days = [day(2024, 1, 6), day(2024, 1, 8)];
        let slots = [slot("Saturday", "09:00", "10:00"), slot("Monday", "09:00", "10:00")];
        let rows = generate_rows(&days, &slots, &cutoffs());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "06/01/2024");
        assert_eq!(rows[0].latest_booking_time, "12:00");
        assert_eq!(rows[1].date, "08/01/2024");
        assert_eq!(rows[1].latest_booking_time, "6:00");
    }

    #[test]
    fn test_day_name_match_is_case_insensitive() {
        let days = [day(2024, 1, 1)];
        let slots = [slot("MONDAY", "09:00", "10:00")];
        let rows = generate_rows(&days, &slots, &cutoffs());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_ordering_by_day_then_slot_discovery() {
        let days = [day(2024, 1, 1), day(2024, 1, 2)];
        let slots = [
            slot("Monday", "09:00", "10:00"),
            slot("Monday", "14:00", "16:00"),
            slot("Tuesday", "08:00", "09:00"),
        ];
        let rows = generate_rows(&days, &slots, &cutoffs());
        let shape: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.date.as_str(), r.start_time.as_str()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("01/01/2024", "09:00"),
                ("01/01/2024", "14:00"),
                ("02/01/2024", "08:00"),
            ]
        );
    }

    #[test]
    fn test_duplicate_slots_emit_duplicate_rows() {
        let days = [day(2024, 1, 1)];
        let slots = [
            slot("Monday", "09:00", "10:00"),
            slot("Monday", "09:00", "10:00"),
        ];
        let rows = generate_rows(&days, &slots, &cutoffs());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn test_unmatched_day_emits_nothing() {
        let days = [day(2024, 1, 1)];
        let slots = [slot("Friday", "09:00", "10:00")];
        assert!(generate_rows(&days, &slots, &cutoffs()).is_empty());
    }
}
