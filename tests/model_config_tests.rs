mod common;
use common::{appt, temp_path};
use ragenda::config::Config;
use ragenda::config::migrate::{migrate_content, missing_fields};
use ragenda::errors::AppError;
use ragenda::models::{Appointment, UserRole};
use ragenda::store::AppointmentStore;
use ragenda::utils::time::{TimeFormat, format_clock, parse_offset, parse_timestamp};

#[test]
fn test_appointment_reads_camel_case_record() {
    let json = r#"{
        "id": "7",
        "title": "Consult",
        "startTime": "2025-10-01T09:00:00+02:00",
        "endTime": "2025-10-01T09:30:00+02:00",
        "status": "confirmed",
        "priority": "high",
        "type": "consultation",
        "participantName": "Ann",
        "isModerated": true,
        "moderatedBy": "mod-1",
        "createdAt": "2025-09-01T00:00:00Z",
        "updatedAt": "2025-09-02T00:00:00Z"
    }"#;

    let a: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(a.kind, "consultation");
    assert_eq!(a.participant.as_ref().unwrap().name.as_deref(), Some("Ann"));
    assert!(a.is_moderated());
    assert_eq!(
        a.moderation.as_ref().unwrap().moderated_by.as_deref(),
        Some("mod-1")
    );

    let out = serde_json::to_value(&a).unwrap();
    assert_eq!(out["startTime"], "2025-10-01T09:00:00+02:00");
    assert_eq!(out["type"], "consultation");
    assert_eq!(out["isModerated"], true);
}

#[test]
fn test_absent_optional_groups() {
    let a = appt("1", "2025-10-01T09:00:00Z", "2025-10-01T10:00:00Z");
    let yaml = serde_yaml::to_string(&a).unwrap();
    assert!(!yaml.contains("participantName"));

    let back: Appointment = serde_yaml::from_str(&yaml).unwrap();
    assert!(back.participant.is_none());
    assert!(back.moderation.is_none());
}

#[test]
fn test_validate_interval() {
    assert!(
        appt("ok", "2025-10-01T09:00:00Z", "2025-10-01T10:00:00Z")
            .validate_interval()
            .is_ok()
    );
    assert!(matches!(
        appt("same", "2025-10-01T09:00:00Z", "2025-10-01T09:00:00Z").validate_interval(),
        Err(AppError::InvalidInterval(_))
    ));
    assert!(matches!(
        appt("bad", "tomorrow", "2025-10-01T09:00:00Z").validate_interval(),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn test_timestamp_and_offset_parsing() {
    assert!(parse_timestamp("2025-10-01T09:00:00+02:00").is_some());
    assert!(parse_timestamp("2025-10-01T09:00:00.250Z").is_some());
    assert_eq!(
        parse_timestamp("2025-10-01 09:00"),
        parse_timestamp("2025-10-01T09:00:00Z")
    );
    assert!(parse_timestamp("01/10/2025").is_none());
    assert!(parse_timestamp("").is_none());

    assert_eq!(parse_offset("+02:00").unwrap().local_minus_utc(), 7200);
    assert_eq!(parse_offset("-05:30").unwrap().local_minus_utc(), -19800);
    assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
    assert!(parse_offset("0200").is_err());
    assert!(parse_offset("+25:00").is_err());
}

#[test]
fn test_clock_formats() {
    let t = parse_timestamp("2025-10-01T13:05:00Z").unwrap();
    let utc = parse_offset("+00:00").unwrap();
    assert_eq!(format_clock(&t, &utc, TimeFormat::H24), "13:05");
    assert_eq!(format_clock(&t, &utc, TimeFormat::H12), "1:05 PM");
    assert_eq!(
        format_clock(&t, &parse_offset("+02:00").unwrap(), TimeFormat::H24),
        "15:05"
    );
}

#[test]
fn test_config_defaults_and_overrides() {
    let cfg: Config = "appointments_file: /tmp/a.yaml\n".parse().unwrap();
    assert_eq!(cfg.start_of_week, 1);
    assert_eq!(cfg.time_format, TimeFormat::H24);
    assert!(!cfg.moderation_enabled);
    assert!(cfg.taxonomy.is_none());

    let cfg: Config = r##"
appointments_file: /tmp/a.yaml
start_of_week: 0
time_format: 12h
utc_offset: "+01:00"
moderation_enabled: true
role: moderator
taxonomy:
  statuses:
    - value: open
      label: Open
      color: "#123456"
"##
    .parse()
    .unwrap();
    assert_eq!(cfg.week_start().unwrap(), chrono::Weekday::Sun);
    assert_eq!(cfg.time_format, TimeFormat::H12);
    assert_eq!(cfg.role, Some(UserRole::Moderator));
    assert_eq!(cfg.taxonomy.unwrap().statuses[0].value, "open");
}

#[test]
fn test_config_rejects_invalid_values() {
    assert!("start_of_week: 7\n".parse::<Config>().is_err());
    assert!("utc_offset: nowhere\n".parse::<Config>().is_err());
    let dup = "taxonomy:\n  types:\n    - {value: a, label: A}\n    - {value: a, label: B}\n";
    assert!(dup.parse::<Config>().is_err());
}

#[test]
fn test_missing_fields_and_migration() {
    let legacy = "appointments_file: /tmp/a.yaml\nstartOfWeekDay: 0\nenableModeration: true\n";

    let missing = missing_fields(legacy).unwrap();
    assert_eq!(
        missing,
        vec!["start_of_week", "time_format", "utc_offset", "moderation_enabled"]
    );

    let (upgraded, actions) = migrate_content(legacy).unwrap();
    assert!(actions.iter().any(|a| a.contains("startOfWeekDay")));
    assert!(missing_fields(&upgraded).unwrap().is_empty());

    let cfg: Config = upgraded.parse().unwrap();
    assert_eq!(cfg.start_of_week, 0);
    assert!(cfg.moderation_enabled);

    let (_, again) = migrate_content(&upgraded).unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_store_keeps_inverted_record_on_load() {
    let path = temp_path("store_inverted", "yaml");
    let yaml = r#"- id: back
  title: Backwards
  startTime: 2025-10-02T10:00:00Z
  endTime: 2025-10-01T10:00:00Z
  status: scheduled
  priority: low
  type: consultation
"#;
    std::fs::write(&path, yaml).unwrap();

    let store = AppointmentStore::open(&path).unwrap();
    assert_eq!(store.appointments().len(), 1);
    assert!(matches!(
        store.appointments()[0].validate_interval(),
        Err(AppError::InvalidInterval(_))
    ));
}
