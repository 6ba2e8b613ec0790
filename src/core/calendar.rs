//! Calendar grid math.
//!
//! Builds the month view as a flat list of day cells padded to whole
//! weeks, with events attached by date.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::CalendarEvent;

/// Weekday headers for the month view, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One cell of the month grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarDay {
    /// Day-of-month number for display.
    pub day: u32,
    pub date: NaiveDate,
    /// False for the leading/trailing fill days of adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the previous month.
pub fn previous_month(cursor: NaiveDate) -> NaiveDate {
    let (year, month) = if cursor.month() == 1 {
        (cursor.year() - 1, 12)
    } else {
        (cursor.year(), cursor.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(cursor)
}

/// First day of the next month.
pub fn next_month(cursor: NaiveDate) -> NaiveDate {
    let (year, month) = if cursor.month() == 12 {
        (cursor.year() + 1, 1)
    } else {
        (cursor.year(), cursor.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(cursor)
}

fn days_in_month(first: NaiveDate) -> u64 {
    u64::from(next_month(first).pred_opt().map(|d| d.day()).unwrap_or(30))
}

/// Events starting on the given date.
pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|e| e.start.date_naive() == date)
        .cloned()
        .collect()
}

/// Events starting today.
pub fn todays_events(events: &[CalendarEvent], today: NaiveDate) -> Vec<CalendarEvent> {
    events_for_date(events, today)
}

/// Build the month grid for the month containing `cursor`.
///
/// Cells run Sunday-first and are padded with previous/next month days to
/// a whole number of weeks. Fill days carry their events too, so items at
/// the month boundary stay visible.
pub fn month_grid(
    cursor: NaiveDate,
    events: &[CalendarEvent],
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let first = month_start(cursor);
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first - Days::new(lead);
    let total = (lead + days_in_month(first)).div_ceil(7) * 7;

    (0..total)
        .map(|offset| {
            let date = start + Days::new(offset);
            CalendarDay {
                day: date.day(),
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_today: date == today,
                events: events_for_date(events, date),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: i64, year: i32, month: u32, day: u32, hour: u32) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("event {id}"),
            start: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(year, month, day, hour + 1, 0, 0).unwrap(),
            location: None,
            description: None,
            event_type: None,
        }
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(previous_month(date(2026, 1, 1)), date(2025, 12, 1));
        assert_eq!(next_month(date(2025, 12, 1)), date(2026, 1, 1));
        assert_eq!(next_month(date(2026, 3, 1)), date(2026, 4, 1));
    }

    #[test]
    fn test_grid_pads_to_whole_weeks() {
        // January 2026 starts on a Thursday: four fill days from December,
        // then 31 days, exactly five weeks.
        let grid = month_grid(date(2026, 1, 15), &[], date(2026, 1, 15));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, date(2025, 12, 28));
        assert!(!grid[0].in_month);
        assert_eq!(grid[4].date, date(2026, 1, 1));
        assert!(grid[4].in_month);
        assert_eq!(grid[34].date, date(2026, 1, 31));
    }

    #[test]
    fn test_grid_without_fill_days() {
        // February 2026 starts on a Sunday and has exactly 28 days.
        let grid = month_grid(date(2026, 2, 10), &[], date(2026, 1, 1));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|d| d.in_month));
    }

    #[test]
    fn test_today_flag() {
        let grid = month_grid(date(2026, 1, 1), &[], date(2026, 1, 7));
        let today: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2026, 1, 7));
    }

    #[test]
    fn test_events_attach_to_their_day() {
        let events = vec![event(1, 2026, 1, 7, 9), event(2, 2026, 1, 7, 14), event(3, 2026, 1, 9, 9)];
        let grid = month_grid(date(2026, 1, 1), &events, date(2026, 1, 7));
        let day7 = grid.iter().find(|d| d.date == date(2026, 1, 7)).unwrap();
        assert_eq!(day7.events.len(), 2);
        assert_eq!(todays_events(&events, date(2026, 1, 9)).len(), 1);
        assert!(todays_events(&events, date(2026, 1, 10)).is_empty());
    }
}
