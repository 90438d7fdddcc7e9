//! Effective status/priority/type option lists.
//!
//! The host may replace any of the three lists wholesale; an absent or empty
//! list falls back to the built-in defaults. Custom values are never checked
//! against the defaults, so database-driven taxonomies work unchanged.

use crate::errors::{AppError, AppResult};
use crate::models::{ConfigurableOption, TaxonomyConfig, TaxonomyField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub static DEFAULT_STATUSES: Lazy<Vec<ConfigurableOption>> = Lazy::new(|| {
    vec![
        ConfigurableOption::new("scheduled", "Scheduled", Some("#3b82f6")),
        ConfigurableOption::new("confirmed", "Confirmed", Some("#10b981")),
        ConfigurableOption::new("in-progress", "In Progress", Some("#f59e0b")),
        ConfigurableOption::new("completed", "Completed", Some("#6b7280")),
        ConfigurableOption::new("cancelled", "Cancelled", Some("#ef4444")),
        ConfigurableOption::new("no-show", "No Show", Some("#8b5cf6")),
    ]
});

pub static DEFAULT_PRIORITIES: Lazy<Vec<ConfigurableOption>> = Lazy::new(|| {
    vec![
        ConfigurableOption::new("low", "Low", Some("#10b981")),
        ConfigurableOption::new("medium", "Medium", Some("#f59e0b")),
        ConfigurableOption::new("high", "High", Some("#f97316")),
        ConfigurableOption::new("urgent", "Urgent", Some("#ef4444")),
    ]
});

pub static DEFAULT_TYPES: Lazy<Vec<ConfigurableOption>> = Lazy::new(|| {
    vec![
        ConfigurableOption::new("consultation", "Consultation", Some("#3b82f6")),
        ConfigurableOption::new("follow-up", "Follow-up", Some("#06b6d4")),
        ConfigurableOption::new("check-up", "Check-up", Some("#10b981")),
        ConfigurableOption::new("procedure", "Procedure", Some("#8b5cf6")),
        ConfigurableOption::new("emergency", "Emergency", Some("#ef4444")),
    ]
});

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static regex"));

pub fn defaults(field: TaxonomyField) -> &'static [ConfigurableOption] {
    match field {
        TaxonomyField::Statuses => &DEFAULT_STATUSES,
        TaxonomyField::Priorities => &DEFAULT_PRIORITIES,
        TaxonomyField::Types => &DEFAULT_TYPES,
    }
}

/// Effective option list for `field`: the custom list verbatim when present
/// and non-empty, the built-in defaults otherwise.
pub fn resolve_taxonomy(
    custom: Option<&TaxonomyConfig>,
    field: TaxonomyField,
) -> &[ConfigurableOption] {
    match custom.map(|c| c.field(field)) {
        Some(list) if !list.is_empty() => list,
        _ => defaults(field),
    }
}

/// Check a host-supplied taxonomy: unique values per list, hex colours only.
pub fn validate(config: &TaxonomyConfig) -> AppResult<()> {
    for field in TaxonomyField::ALL {
        let mut seen = HashSet::new();
        for option in config.field(field) {
            if !seen.insert(option.value.as_str()) {
                return Err(AppError::DuplicateOption {
                    field: field.as_str(),
                    value: option.value.clone(),
                });
            }

            if let Some(color) = &option.color
                && !HEX_COLOR.is_match(color)
            {
                return Err(AppError::InvalidColor {
                    field: field.as_str(),
                    value: option.value.clone(),
                    color: color.clone(),
                });
            }
        }
    }
    Ok(())
}

/// How an appointment's stored value relates to the current taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    Known(&'a ConfigurableOption),
    /// Stale or foreign value: kept for display, never rewritten.
    Unknown(&'a str),
}

impl<'a> Classification<'a> {
    pub fn label(&self) -> &'a str {
        match self {
            Classification::Known(o) => &o.label,
            Classification::Unknown(v) => v,
        }
    }

    pub fn option(&self) -> Option<&'a ConfigurableOption> {
        match self {
            Classification::Known(o) => Some(o),
            Classification::Unknown(_) => None,
        }
    }
}

pub fn classify<'a>(options: &'a [ConfigurableOption], value: &'a str) -> Classification<'a> {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or(Classification::Unknown(value), Classification::Known)
}

/// Options an edit form may offer.
pub fn selectable(options: &[ConfigurableOption]) -> impl Iterator<Item = &ConfigurableOption> {
    options.iter().filter(|o| !o.disabled)
}

/// Preselected value for new appointments.
pub fn default_value(options: &[ConfigurableOption]) -> Option<&str> {
    selectable(options).next().map(|o| o.value.as_str())
}
