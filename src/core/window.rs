//! View window calculation and week-start handling.

use crate::errors::{AppError, AppResult};
use crate::models::{ViewMode, ViewWindow};
use crate::utils::date::{add_days, date_range, first_of_month, last_of_month};
use chrono::{Datelike, Months, NaiveDate, Weekday};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Map the configurable `0=Sunday .. 6=Saturday` offset to a weekday.
pub fn week_start_from_index(index: u8) -> AppResult<Weekday> {
    WEEKDAYS
        .get(index as usize)
        .copied()
        .ok_or(AppError::InvalidWeekStart(index))
}

/// Labels in column order for a week starting on `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    let offset = week_start.num_days_from_sunday() as usize;
    std::array::from_fn(|i| WEEKDAY_LABELS[(offset + i) % 7])
}

/// Column (0..7) of `date` in a grid whose first column is `week_start`.
pub fn column_of(date: NaiveDate, week_start: Weekday) -> usize {
    let day = date.weekday().num_days_from_sunday();
    ((day + 7 - week_start.num_days_from_sunday()) % 7) as usize
}

fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    add_days(date, -(column_of(date, week_start) as i64))
}

fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    add_days(date, 6 - column_of(date, week_start) as i64)
}

/// Inclusive date range and cell dates displayed for `reference` in `mode`.
///
/// Agenda has no bounded window and yields None.
pub fn compute_window(
    reference: NaiveDate,
    mode: ViewMode,
    week_start: Weekday,
) -> Option<ViewWindow> {
    let (start, end) = match mode {
        ViewMode::Month => (
            start_of_week(first_of_month(reference), week_start),
            end_of_week(last_of_month(reference), week_start),
        ),
        ViewMode::Week => {
            let start = start_of_week(reference, week_start);
            (start, add_days(start, 6))
        }
        ViewMode::Day => (reference, reference),
        ViewMode::Agenda => return None,
    };

    Some(ViewWindow {
        start,
        end,
        cells: date_range(start, end),
    })
}

/// Reference date after navigating `steps` views forward (negative: back).
pub fn shift(reference: NaiveDate, mode: ViewMode, steps: i32) -> NaiveDate {
    match mode {
        ViewMode::Month => {
            let months = Months::new(steps.unsigned_abs());
            let moved = if steps >= 0 {
                reference.checked_add_months(months)
            } else {
                reference.checked_sub_months(months)
            };
            moved.unwrap_or(reference)
        }
        ViewMode::Week => add_days(reference, 7 * steps as i64),
        ViewMode::Day | ViewMode::Agenda => add_days(reference, steps as i64),
    }
}
