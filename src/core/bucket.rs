//! Window filtering and per-day bucketing.
//!
//! Dates are taken in the display zone, so an appointment touches every
//! calendar day between its local start day and local end day inclusive.
//! Records whose timestamps do not parse are invisible here.

use crate::models::{Appointment, DayBucket, ViewWindow};
use chrono::{Datelike, FixedOffset, NaiveDate};
use log::debug;

fn span(appointment: &Appointment, zone: &FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
    let span = appointment.date_span(zone);
    if span.is_none() {
        debug!(
            "skipping appointment {}: unparseable interval '{}'..'{}'",
            appointment.id, appointment.start_time, appointment.end_time
        );
    }
    span
}

/// Appointments overlapping the window (inclusive on both ends), input order.
pub fn filter_by_window<'a>(
    appointments: &[&'a Appointment],
    window: &ViewWindow,
    zone: &FixedOffset,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .copied()
        .filter(|a| {
            span(a, zone).is_some_and(|(start, end)| start <= window.end && end >= window.start)
        })
        .collect()
}

/// Appointments touching `date`: its start day, its end day, or any day between.
pub fn bucket_by_date<'a>(
    appointments: &[&'a Appointment],
    date: NaiveDate,
    zone: &FixedOffset,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .copied()
        .filter(|a| span(a, zone).is_some_and(|(start, end)| start <= date && date <= end))
        .collect()
}

/// One bucket per window cell. `focus_month` marks which cells belong to the
/// reference month; pass None outside month view.
pub fn bucket_window<'a>(
    appointments: &[&'a Appointment],
    window: &ViewWindow,
    zone: &FixedOffset,
    focus_month: Option<(i32, u32)>,
) -> Vec<DayBucket<'a>> {
    let visible = filter_by_window(appointments, window, zone);

    window
        .cells
        .iter()
        .map(|&date| DayBucket {
            date,
            in_focus: focus_month.is_none_or(|(y, m)| date.year() == y && date.month() == m),
            appointments: bucket_by_date(&visible, date, zone),
        })
        .collect()
}
