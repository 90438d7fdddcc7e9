use crate::models::Appointment;
use chrono::{FixedOffset, NaiveDate};

/// Ascending by start instant, stable for ties. Records whose start does not
/// parse go last, in input order.
pub fn sort_for_agenda<'a>(appointments: &[&'a Appointment]) -> Vec<&'a Appointment> {
    let mut keyed: Vec<_> = appointments.iter().map(|a| (a.start(), *a)).collect();

    // sort_by is stable; None sorts after every Some
    keyed.sort_by(|(x, _), (y, _)| match (x, y) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    keyed.into_iter().map(|(_, a)| a).collect()
}

/// Group an agenda-sorted list under its start days. Entries without a
/// parseable start are collected under None at the end.
pub fn group_by_day<'a>(
    sorted: &[&'a Appointment],
    zone: &FixedOffset,
) -> Vec<(Option<NaiveDate>, Vec<&'a Appointment>)> {
    let mut groups: Vec<(Option<NaiveDate>, Vec<&'a Appointment>)> = Vec::new();

    for a in sorted {
        let day = a.start().map(|s| s.with_timezone(zone).date_naive());
        match groups.last_mut() {
            Some((d, items)) if *d == day => items.push(a),
            _ => groups.push((day, vec![*a])),
        }
    }

    groups
}
