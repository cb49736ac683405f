//! Month grid builder
//!
//! Maps a reference month to the fixed 42-cell (6 weeks x 7 days) grid the
//! calendar renders, and buckets events into day cells by date-range
//! containment.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::models::{CalendarEvent, EventCategory};
use crate::utils::errors::{LabdeskError, Result};

use super::holidays;

/// Number of cells in the rendered grid
pub const GRID_CELLS: usize = 42;

/// One day cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month
    pub in_month: bool,
}

impl DayCell {
    /// Red-day coloring: fixed holiday or Sunday
    pub fn is_red_day(&self) -> bool {
        holidays::is_holiday(self.date) || self.date.weekday() == Weekday::Sun
    }

    /// Blue-day coloring: Saturday
    pub fn is_blue_day(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }
}

/// The 42-cell grid for one displayed month
#[derive(Debug, Clone)]
pub struct MonthGrid {
    year: i32,
    /// Zero-based month index, matching the browser client's convention
    month0: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for `(year, month0)`, `month0` zero-based.
    ///
    /// Cells start from the Sunday on or before the first of the month and
    /// always span exactly six weeks.
    pub fn new(year: i32, month0: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(|| {
            LabdeskError::InvalidInput(format!("Invalid month: {}-{}", year, month0))
        })?;

        let offset = first.weekday().num_days_from_sunday() as u64;
        let first_cell = first - Days::new(offset);

        let cells = (0..GRID_CELLS as u64)
            .map(|idx| {
                let date = first_cell + Days::new(idx);
                DayCell {
                    date,
                    in_month: date.month0() == month0 && date.year() == year,
                }
            })
            .collect();

        Ok(Self { year, month0, cells })
    }

    /// Grid for the month containing today (host-local time)
    pub fn current() -> Result<Self> {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// `YYYY.MM` header label
    pub fn label(&self) -> String {
        format!("{:04}.{:02}", self.year, self.month0 + 1)
    }

    /// Grid for the previous month
    pub fn prev(&self) -> Result<Self> {
        if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }

    /// Grid for the next month
    pub fn next(&self) -> Result<Self> {
        if self.month0 == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }
}

/// Events whose inclusive `[start, end]` day range contains `date` and whose
/// category passes the filter.
///
/// Comparison is at day granularity in host-local time; an event without a
/// category matches every filter.
pub fn events_on<'a>(
    date: NaiveDate,
    events: &'a [CalendarEvent],
    filter: EventCategory,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            let start = event.start_at.with_timezone(&Local).date_naive();
            let end = event.end_at.with_timezone(&Local).date_naive();
            let in_range = start <= date && date <= end;
            let category_ok = event.category.is_none() || event.category() == filter;
            in_range && category_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    // Timestamps are interpreted in host-local time, so build them from local
    // wall-clock values to keep the assertions timezone-independent.
    fn event(id: i64, start: &str, end: &str, category: Option<&str>) -> CalendarEvent {
        let parse = |s| {
            let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
            Local
                .from_local_datetime(&naive)
                .single()
                .unwrap()
                .with_timezone(&Utc)
        };
        CalendarEvent {
            id,
            title: format!("event-{}", id),
            start_at: parse(start),
            end_at: parse(end),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_grid_has_42_cells_starting_sunday() {
        let grid = MonthGrid::new(2025, 2).unwrap(); // March 2025
        assert_eq!(grid.cells().len(), GRID_CELLS);
        assert_eq!(grid.cells()[0].date.weekday(), Weekday::Sun);
        assert_eq!(grid.label(), "2025.03");
    }

    #[test]
    fn test_grid_contains_every_month_day_once() {
        let grid = MonthGrid::new(2024, 1).unwrap(); // February of a leap year
        let in_month: Vec<_> = grid.cells().iter().filter(|c| c.in_month).collect();
        assert_eq!(in_month.len(), 29);
        assert_eq!(in_month[0].date.day(), 1);
        assert_eq!(in_month[28].date.day(), 29);
    }

    #[test]
    fn test_month_starting_on_sunday_begins_with_day_one() {
        // June 2025 starts on a Sunday; no leading out-of-month cells
        let grid = MonthGrid::new(2025, 5).unwrap();
        assert!(grid.cells()[0].in_month);
        assert_eq!(grid.cells()[0].date.day(), 1);
    }

    #[test]
    fn test_navigation_wraps_year() {
        let grid = MonthGrid::new(2025, 0).unwrap();
        assert_eq!(grid.prev().unwrap().label(), "2024.12");
        let grid = MonthGrid::new(2025, 11).unwrap();
        assert_eq!(grid.next().unwrap().label(), "2026.01");
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthGrid::new(2025, 12).is_err());
    }

    #[test]
    fn test_multi_day_event_spans_inclusive_range() {
        let events = vec![event(1, "2025-03-10 00:00", "2025-03-12 23:00", Some("Laboratory"))];
        for day in 10..=12 {
            let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            assert_eq!(events_on(date, &events, EventCategory::Laboratory).len(), 1);
        }
        let before = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        assert!(events_on(before, &events, EventCategory::Laboratory).is_empty());
        assert!(events_on(after, &events, EventCategory::Laboratory).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let events = vec![
            event(1, "2025-03-10 01:00", "2025-03-10 02:00", Some("Laboratory")),
            event(2, "2025-03-10 01:00", "2025-03-10 02:00", Some("개인")),
            event(3, "2025-03-10 01:00", "2025-03-10 02:00", None),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let lab = events_on(date, &events, EventCategory::Laboratory);
        assert_eq!(lab.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);

        let personal = events_on(date, &events, EventCategory::Personal);
        assert_eq!(personal.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_red_and_blue_days() {
        let holiday = DayCell { date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(), in_month: true };
        assert!(holiday.is_red_day());
        let saturday = DayCell { date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), in_month: true };
        // 2025-03-01 is both a Saturday and a holiday; red wins in rendering
        assert!(saturday.is_red_day());
        let plain_saturday =
            DayCell { date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(), in_month: true };
        assert!(plain_saturday.is_blue_day() && !plain_saturday.is_red_day());
    }
}
