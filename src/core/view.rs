//! Render-data pipeline: window, labels and buckets for one calendar screen.
//! Any front end binds this plain data to its own rendering model.

use crate::core::{agenda, bucket, window};
use crate::models::{Appointment, DayBucket, ViewMode, ViewWindow};
use chrono::{Datelike, FixedOffset, NaiveDate, Weekday};
use log::debug;

#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    pub week_start: Weekday,
    pub zone: FixedOffset,
}

#[derive(Debug, Clone)]
pub enum ViewBody<'a> {
    /// Month, week and day views.
    Grid(Vec<DayBucket<'a>>),
    Agenda(Vec<&'a Appointment>),
}

#[derive(Debug, Clone)]
pub struct CalendarView<'a> {
    pub mode: ViewMode,
    pub reference: NaiveDate,
    pub window: Option<ViewWindow>,
    pub labels: [&'static str; 7],
    pub body: ViewBody<'a>,
}

pub fn build_view<'a>(
    appointments: &'a [Appointment],
    reference: NaiveDate,
    mode: ViewMode,
    settings: &ViewSettings,
) -> CalendarView<'a> {
    debug!(
        "building {} view for {} over {} appointments",
        mode.as_str(),
        reference,
        appointments.len()
    );
    let all: Vec<&Appointment> = appointments.iter().collect();
    let win = window::compute_window(reference, mode, settings.week_start);

    let body = match &win {
        Some(w) => {
            let focus = (mode == ViewMode::Month).then(|| (reference.year(), reference.month()));
            let mut days = bucket::bucket_window(&all, w, &settings.zone, focus);
            // same-day lists are shown in agenda order
            for day in &mut days {
                day.appointments = agenda::sort_for_agenda(&day.appointments);
            }
            ViewBody::Grid(days)
        }
        None => ViewBody::Agenda(agenda::sort_for_agenda(&all)),
    };

    CalendarView {
        mode,
        reference,
        window: win,
        labels: window::weekday_labels(settings.week_start),
        body,
    }
}
