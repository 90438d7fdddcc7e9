//! Unified application error type.
//! Host-side modules (config, store, export, cli) return AppError to keep the
//! error handling consistent. The calendar core itself is infallible apart from
//! input parsing helpers.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid week start day: {0} (expected 0=Sunday .. 6=Saturday)")]
    InvalidWeekStart(u8),

    #[error("Invalid user role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Taxonomy errors
    // ---------------------------
    #[error("Duplicate value '{value}' in {field} taxonomy")]
    DuplicateOption { field: &'static str, value: String },

    #[error("Invalid color '{color}' for {field} option '{value}'")]
    InvalidColor {
        field: &'static str,
        value: String,
        color: String,
    },

    #[error("Unknown {field} value: {value}")]
    UnknownOption { field: &'static str, value: String },

    // ---------------------------
    // Appointment errors
    // ---------------------------
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),

    #[error("Duplicate appointment id: {0}")]
    DuplicateAppointment(String),

    #[error("Appointment {0} ends before it starts")]
    InvalidInterval(String),

    #[error("Status change denied for role '{0}' while moderation is enabled")]
    StatusChangeDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
