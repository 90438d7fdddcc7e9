use super::appointment::Appointment;
use chrono::NaiveDate;

/// Contiguous, inclusive date range displayed by a bounded calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cells: Vec<NaiveDate>,
}

impl ViewWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Appointments touching one calendar cell.
#[derive(Debug, Clone)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub in_focus: bool,
    pub appointments: Vec<&'a Appointment>,
}
