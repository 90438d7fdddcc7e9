#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{FixedOffset, NaiveDate};
use ragenda::models::Appointment;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rag() -> Command {
    cargo_bin_cmd!("ragenda")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ragenda.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn appt(id: &str, start: &str, end: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        title: format!("Appointment {id}"),
        description: None,
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: "scheduled".to_string(),
        priority: "medium".to_string(),
        kind: "consultation".to_string(),
        participant: None,
        moderation: None,
        created_at: "2025-09-01T08:00:00Z".to_string(),
        updated_at: "2025-09-01T08:00:00Z".to_string(),
    }
}

pub fn ids(list: &[&Appointment]) -> Vec<String> {
    list.iter().map(|a| a.id.clone()).collect()
}

/// Config file with moderation switched on, plus the given appointment file.
pub fn write_config(name: &str, appointments_file: &str, extra: &str) -> String {
    let path = temp_path(name, "conf");
    let yaml = format!(
        "appointments_file: {appointments_file}\nstart_of_week: 1\ntime_format: 24h\nutc_offset: '+00:00'\nmoderation_enabled: true\n{extra}"
    );
    fs::write(&path, yaml).expect("write config");
    path
}

/// Appointment file with two October 2025 appointments.
pub fn write_sample_store(name: &str) -> String {
    let path = temp_path(name, "yaml");
    let yaml = r#"- id: a1
  title: Dental check
  startTime: 2025-10-01T09:00:00Z
  endTime: 2025-10-01T10:00:00Z
  status: scheduled
  priority: medium
  type: check-up
  participantName: Jane Roe
- id: a2
  title: Physio block
  startTime: 2025-10-06T14:00:00Z
  endTime: 2025-10-08T15:00:00Z
  status: confirmed
  priority: high
  type: procedure
"#;
    fs::write(&path, yaml).expect("write store");
    path
}
