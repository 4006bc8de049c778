//! Grids backing the three views.

use chrono::NaiveDate;

use super::{end_of_month, end_of_week, events_on, hour_label, laid_out_hour, start_of_month, start_of_week};
use crate::constants::{DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::event::Event;
use crate::layout::LaidOutEvent;

/// One hour of the day view.
#[derive(Debug, Clone)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    pub events: Vec<LaidOutEvent>,
}

#[derive(Debug, Clone)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub rows: Vec<HourRow>,
}

impl DayGrid {
    pub fn build(events: &[Event], date: NaiveDate) -> Self {
        let day_events = events_on(events, date);

        let rows = (0..HOURS_PER_DAY)
            .map(|hour| HourRow {
                hour,
                label: hour_label(hour),
                events: laid_out_hour(&day_events, hour),
            })
            .collect();

        DayGrid { date, rows }
    }

    pub fn event_count(&self) -> usize {
        self.rows.iter().map(|r| r.events.len()).sum()
    }
}

/// One hour across the seven days of the week view.
#[derive(Debug, Clone)]
pub struct WeekRow {
    pub hour: u32,
    pub label: String,
    /// One laid-out bucket per day, Sunday first
    pub cells: Vec<Vec<LaidOutEvent>>,
}

#[derive(Debug, Clone)]
pub struct WeekGrid {
    /// Sunday through Saturday
    pub days: Vec<NaiveDate>,
    pub rows: Vec<WeekRow>,
}

impl WeekGrid {
    pub fn build(events: &[Event], anchor: NaiveDate) -> Self {
        let days: Vec<NaiveDate> = start_of_week(anchor)
            .iter_days()
            .take(DAYS_PER_WEEK)
            .collect();

        let day_events: Vec<Vec<&Event>> = days.iter().map(|d| events_on(events, *d)).collect();

        let rows = (0..HOURS_PER_DAY)
            .map(|hour| WeekRow {
                hour,
                label: hour_label(hour),
                cells: day_events
                    .iter()
                    .map(|events| laid_out_hour(events, hour))
                    .collect(),
            })
            .collect();

        WeekGrid { days, rows }
    }
}

/// One date cell of the month view.
#[derive(Debug, Clone)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the leading and trailing days of neighbouring months
    pub in_month: bool,
    /// Events of the date in stored order, not laid out
    pub events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub anchor: NaiveDate,
    pub cells: Vec<MonthCell>,
}

impl MonthGrid {
    /// All dates from the Sunday on or before the 1st to the Saturday on or
    /// after the last day of the anchor's month.
    pub fn build(events: &[Event], anchor: NaiveDate) -> Self {
        let first = start_of_month(anchor);
        let last = end_of_month(anchor);
        let grid_end = end_of_week(last);

        let cells = start_of_week(first)
            .iter_days()
            .take_while(|d| *d <= grid_end)
            .map(|date| MonthCell {
                date,
                in_month: date >= first && date <= last,
                events: events_on(events, date).into_iter().cloned().collect(),
            })
            .collect();

        MonthGrid { anchor, cells }
    }

    /// Cells grouped into Sunday-first weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event_on;
    use crate::time::parse_date;

    fn sample_events() -> Vec<Event> {
        vec![
            event_on("a", "2025-03-20", "09:00", "10:00"),
            event_on("b", "2025-03-20", "09:30", "10:30"),
            event_on("c", "2025-03-20", "14:00", "15:00"),
            event_on("d", "2025-03-22", "09:00", "09:30"),
            event_on("e", "2025-04-01", "08:00", "08:30"),
        ]
    }

    #[test]
    fn test_day_grid_has_24_rows() {
        let grid = DayGrid::build(&sample_events(), parse_date("2025-03-20").unwrap());

        assert_eq!(grid.rows.len(), 24);
        assert_eq!(grid.rows[0].label, "12 AM");
        assert_eq!(grid.event_count(), 3);

        let nine = &grid.rows[9];
        assert_eq!(nine.events.len(), 2);
        assert_eq!(nine.events[1].lane_index, 1);
        assert_eq!(nine.events[1].active_count, 2);
        assert_eq!(grid.rows[14].events.len(), 1);
    }

    #[test]
    fn test_week_grid_spans_sunday_to_saturday() {
        let grid = WeekGrid::build(&sample_events(), parse_date("2025-03-20").unwrap());

        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.days[0], parse_date("2025-03-16").unwrap());
        assert_eq!(grid.days[6], parse_date("2025-03-22").unwrap());

        let nine = &grid.rows[9];
        assert_eq!(nine.cells.len(), 7);
        // Thursday
        assert_eq!(nine.cells[4].len(), 2);
        // Saturday
        assert_eq!(nine.cells[6].len(), 1);
        assert!(nine.cells[0].is_empty());
    }

    #[test]
    fn test_month_grid_covers_whole_weeks() {
        let grid = MonthGrid::build(&sample_events(), parse_date("2025-03-20").unwrap());

        // March 2025 starts on a Saturday and ends on a Monday
        assert_eq!(grid.cells.first().unwrap().date, parse_date("2025-02-23").unwrap());
        assert_eq!(grid.cells.last().unwrap().date, parse_date("2025-04-05").unwrap());
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.weeks().count(), 6);

        let in_month = grid.cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 31);
    }

    #[test]
    fn test_month_grid_lists_events_in_stored_order() {
        let grid = MonthGrid::build(&sample_events(), parse_date("2025-03-20").unwrap());

        let twentieth = grid
            .cells
            .iter()
            .find(|c| c.date == parse_date("2025-03-20").unwrap())
            .unwrap();
        let ids: Vec<&str> = twentieth.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Trailing April days still show their events
        let first_of_april = grid
            .cells
            .iter()
            .find(|c| c.date == parse_date("2025-04-01").unwrap())
            .unwrap();
        assert!(!first_of_april.in_month);
        assert_eq!(first_of_april.events.len(), 1);
    }

    #[test]
    fn test_month_grid_exact_four_weeks() {
        // February 2026 starts on a Sunday and ends on a Saturday
        let grid = MonthGrid::build(&[], parse_date("2026-02-10").unwrap());
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(|c| c.in_month));
    }
}
