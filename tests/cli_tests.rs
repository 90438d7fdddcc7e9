mod common;
use common::{rag, temp_path, write_config, write_sample_store};
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_appointment_file() {
    let cfg = temp_path("cli_init", "conf");
    let store = temp_path("cli_init_store", "yaml");

    rag()
        .args(["--test", "--config", &cfg, "--file", &store, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&store).is_ok());
    // test mode never writes the configuration
    assert!(fs::metadata(&cfg).is_err());
}

#[test]
fn test_add_then_day_view() {
    let cfg = temp_path("cli_add", "conf");
    let store = temp_path("cli_add_store", "yaml");

    rag()
        .args([
            "--config",
            &cfg,
            "--file",
            &store,
            "add",
            "x1",
            "Blood test",
            "--start",
            "2025-11-03T08:30:00Z",
            "--end",
            "2025-11-03T09:00:00Z",
            "--priority",
            "high",
        ])
        .assert()
        .success()
        .stdout(contains("Appointment x1 added"));

    let saved = fs::read_to_string(&store).unwrap();
    assert!(saved.contains("startTime"));
    assert!(saved.contains("status: scheduled"));

    rag()
        .args([
            "--config", &cfg, "--file", &store, "view", "--mode", "day", "--date", "2025-11-03",
        ])
        .assert()
        .success()
        .stdout(contains("Blood test"))
        .stdout(contains("08:30"));
}

#[test]
fn test_add_rejects_bad_input() {
    let cfg = temp_path("cli_add_bad", "conf");
    let store = temp_path("cli_add_bad_store", "yaml");

    rag()
        .args([
            "--config", &cfg, "--file", &store, "add", "x2", "Backwards", "--start",
            "2025-11-03T10:00:00Z", "--end", "2025-11-03T09:00:00Z",
        ])
        .assert()
        .failure();

    rag()
        .args([
            "--config", &cfg, "--file", &store, "add", "x3", "Odd", "--start",
            "2025-11-03T08:00:00Z", "--end", "2025-11-03T09:00:00Z", "--type", "surgery",
        ])
        .assert()
        .failure()
        .stderr(contains("surgery"));
}

#[test]
fn test_month_view_shows_multi_day_appointment() {
    let store = write_sample_store("cli_month");
    let cfg = write_config("cli_month", &store, "");

    rag()
        .args(["--config", &cfg, "view", "--date", "2025-10-15"])
        .assert()
        .success()
        .stdout(contains("October 2025"))
        .stdout(contains("Physio"));
}

#[test]
fn test_status_change_requires_privileged_role() {
    let store = write_sample_store("cli_status");
    let cfg = write_config("cli_status", &store, "");

    rag()
        .args(["--config", &cfg, "status", "a1", "confirmed", "--role", "patient"])
        .assert()
        .failure()
        .stderr(contains("moderators"));

    let untouched = fs::read_to_string(&store).unwrap();
    assert!(!untouched.contains("isModerated: true"));

    rag()
        .args([
            "--config", &cfg, "status", "a1", "confirmed", "--role", "admin", "--actor", "root",
        ])
        .assert()
        .success()
        .stdout(contains("scheduled → confirmed"));

    let saved = fs::read_to_string(&store).unwrap();
    assert!(saved.contains("isModerated: true"));
    assert!(saved.contains("moderatedBy: root"));
}

#[test]
fn test_status_rejects_unknown_value() {
    let store = write_sample_store("cli_status_unknown");
    let cfg = write_config("cli_status_unknown", &store, "");

    rag()
        .args(["--config", &cfg, "status", "a1", "archived", "--role", "admin"])
        .assert()
        .failure()
        .stderr(contains("archived"));
}

#[test]
fn test_taxonomy_prints_defaults() {
    let cfg = temp_path("cli_tax", "conf");

    rag()
        .args(["--config", &cfg, "taxonomy", "--field", "statuses"])
        .assert()
        .success()
        .stdout(contains("in-progress"))
        .stdout(contains("no-show"));
}

#[test]
fn test_taxonomy_prints_custom_list() {
    let store = temp_path("cli_tax_custom_store", "yaml");
    let extra = "taxonomy:\n  priorities:\n    - {value: p1, label: Routine}\n    - {value: p2, label: Rush}\n";
    let cfg = write_config("cli_tax_custom", &store, extra);

    rag()
        .args(["--config", &cfg, "taxonomy", "--field", "priorities"])
        .assert()
        .success()
        .stdout(contains("Routine"))
        .stdout(contains("2 options"));
}

#[test]
fn test_export_csv_with_labels() {
    let store = write_sample_store("cli_export");
    let cfg = write_config("cli_export", &store, "");
    let out = temp_path("cli_export_out", "csv");

    rag()
        .args([
            "--config", &cfg, "export", "--format", "csv", "--out", &out, "--range", "2025-10",
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().contains("status_label"));
    assert!(lines.next().unwrap().starts_with("a1,"));
    assert!(csv.contains("Check-up"));
}

#[test]
fn test_config_migrate_renames_legacy_keys() {
    let cfg = temp_path("cli_check", "conf");
    fs::write(&cfg, "startOfWeekDay: 0\n").unwrap();

    rag()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success();

    let migrated = fs::read_to_string(&cfg).unwrap();
    assert!(migrated.contains("start_of_week: 0"));
    assert!(migrated.contains("utc_offset"));
}

#[test]
fn test_config_edit_fails_when_no_editor_runs() {
    let cfg = temp_path("cli_edit", "conf");

    rag()
        .env("EDITOR", "/nonexistent/editor-a")
        .args([
            "--config",
            &cfg,
            "config",
            "--edit",
            "--editor",
            "/nonexistent/editor-b",
        ])
        .assert()
        .failure()
        .stderr(contains("failed to edit configuration file"));
}

#[test]
fn test_json_store_add_and_agenda() {
    let cfg = temp_path("cli_json_store", "conf");
    let store = temp_path("cli_json_store", "json");

    rag()
        .args([
            "--config",
            &cfg,
            "--file",
            &store,
            "add",
            "j1",
            "Vaccination",
            "--start",
            "2025-12-01T10:00:00Z",
            "--end",
            "2025-12-01T10:15:00Z",
            "--type",
            "procedure",
        ])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    let records = saved.as_array().expect("JSON array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["startTime"], "2025-12-01T10:00:00Z");
    assert_eq!(records[0]["type"], "procedure");
    assert_eq!(records[0]["status"], "scheduled");

    rag()
        .args(["--config", &cfg, "--file", &store, "view", "--mode", "agenda"])
        .assert()
        .success()
        .stdout(contains("Vaccination"))
        .stdout(contains("(j1)"));
}

#[test]
fn test_export_json_overwrites_with_force() {
    let store = write_sample_store("cli_export_json");
    let cfg = write_config("cli_export_json", &store, "");
    let out = temp_path("cli_export_json_out", "json");
    fs::write(&out, "stale").unwrap();

    rag()
        .args([
            "--config", &cfg, "export", "--format", "json", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().expect("JSON array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "a1");
    assert_eq!(rows[0]["status_label"], "Scheduled");
    assert_eq!(rows[1]["status_label"], "Confirmed");
}

#[test]
fn test_empty_export_leaves_existing_file_alone() {
    let store = write_sample_store("cli_export_empty");
    let cfg = write_config("cli_export_empty", &store, "");
    let out = temp_path("cli_export_empty_out", "csv");
    fs::write(&out, "keep").unwrap();

    // no rows, so no overwrite question on stdin
    rag()
        .args([
            "--config", &cfg, "export", "--out", &out, "--range", "1999-01",
        ])
        .assert()
        .success()
        .stdout(contains("No appointments"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep");
}
