mod common;
use chrono::{FixedOffset, Weekday};
use common::{appt, date, ids, utc};
use ragenda::core::bucket::{bucket_by_date, bucket_window, filter_by_window};
use ragenda::core::window::compute_window;
use ragenda::models::{Appointment, ViewMode};
use ragenda::utils::date::date_range;

fn sample() -> Vec<Appointment> {
    vec![
        appt("short", "2025-10-01T09:00:00Z", "2025-10-01T10:00:00Z"),
        appt("three-day", "2025-10-01T09:00:00Z", "2025-10-03T10:00:00Z"),
        appt("before", "2025-09-10T09:00:00Z", "2025-09-10T10:00:00Z"),
        appt("edge-start", "2025-09-28T22:00:00Z", "2025-09-29T01:00:00Z"),
        appt("long", "2025-09-01T09:00:00Z", "2025-12-01T09:00:00Z"),
        appt("month-end", "2025-10-31T16:00:00Z", "2025-11-01T09:00:00Z"),
        appt("after", "2025-11-10T09:00:00Z", "2025-11-10T10:00:00Z"),
        appt("broken", "not a date", "2025-10-02T10:00:00Z"),
    ]
}

#[test]
fn test_three_day_appointment_appears_on_each_day() {
    let items = sample();
    let all: Vec<&Appointment> = items.iter().collect();

    for d in ["2025-10-01", "2025-10-02", "2025-10-03"] {
        let bucket = bucket_by_date(&all, date(d), &utc());
        assert!(ids(&bucket).contains(&"three-day".to_string()), "{d}");
    }
    for d in ["2025-09-30", "2025-10-04"] {
        let bucket = bucket_by_date(&all, date(d), &utc());
        assert!(!ids(&bucket).contains(&"three-day".to_string()), "{d}");
    }
}

#[test]
fn test_filter_by_month_window_inclusive() {
    let items = sample();
    let all: Vec<&Appointment> = items.iter().collect();
    let w = compute_window(date("2025-10-15"), ViewMode::Month, Weekday::Mon).unwrap();

    let visible = filter_by_window(&all, &w, &utc());
    assert_eq!(
        ids(&visible),
        vec!["short", "three-day", "edge-start", "long", "month-end"]
    );
}

#[test]
fn test_unparseable_start_is_skipped_silently() {
    let items = sample();
    let all: Vec<&Appointment> = items.iter().collect();
    let w = compute_window(date("2025-10-02"), ViewMode::Day, Weekday::Mon).unwrap();

    let visible = filter_by_window(&all, &w, &utc());
    assert_eq!(ids(&visible), vec!["three-day", "long"]);
    assert!(bucket_by_date(&all, date("2025-10-02"), &utc())
        .iter()
        .all(|a| a.id != "broken"));
}

#[test]
fn test_filter_then_bucket_matches_unfiltered_buckets() {
    let items = sample();
    let all: Vec<&Appointment> = items.iter().collect();
    let w = compute_window(date("2025-10-15"), ViewMode::Month, Weekday::Mon).unwrap();
    let visible = filter_by_window(&all, &w, &utc());

    for d in date_range(date("2025-10-01"), date("2025-10-31")) {
        let from_window = bucket_by_date(&visible, d, &utc());
        let direct = bucket_by_date(&all, d, &utc());
        assert_eq!(ids(&from_window), ids(&direct), "{d}");

        let mut unique = ids(&from_window);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), from_window.len());
    }

    assert_eq!(
        ids(&bucket_by_date(&visible, date("2025-10-01"), &utc())),
        vec!["short", "three-day", "long"]
    );
    assert_eq!(
        ids(&bucket_by_date(&visible, date("2025-10-31"), &utc())),
        vec!["long", "month-end"]
    );
}

#[test]
fn test_display_zone_moves_day_boundary() {
    let late = appt("late", "2025-10-01T23:30:00Z", "2025-10-01T23:45:00Z");
    let all = vec![&late];
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    assert_eq!(bucket_by_date(&all, date("2025-10-01"), &utc()).len(), 1);
    assert!(bucket_by_date(&all, date("2025-10-01"), &plus_two).is_empty());
    assert_eq!(bucket_by_date(&all, date("2025-10-02"), &plus_two).len(), 1);
}

#[test]
fn test_bucket_window_marks_focus_month() {
    let items = sample();
    let all: Vec<&Appointment> = items.iter().collect();
    let w = compute_window(date("2025-10-15"), ViewMode::Month, Weekday::Mon).unwrap();

    let days = bucket_window(&all, &w, &utc(), Some((2025, 10)));
    assert_eq!(days.len(), 35);
    assert!(!days[0].in_focus);
    assert_eq!(ids(&days[0].appointments), vec!["edge-start", "long"]);
    assert!(days[2].in_focus);
    assert_eq!(days[2].date, date("2025-10-01"));
    assert!(!days[34].in_focus);

    let week = compute_window(date("2025-10-15"), ViewMode::Week, Weekday::Mon).unwrap();
    assert!(
        bucket_window(&all, &week, &utc(), None)
            .iter()
            .all(|d| d.in_focus)
    );
}
