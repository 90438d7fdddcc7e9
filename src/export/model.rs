// src/export/model.rs

use crate::core::taxonomy::{classify, resolve_taxonomy};
use crate::models::{Appointment, TaxonomyConfig, TaxonomyField};
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
///
/// Categorical fields carry both the stored value and the label it resolves to
/// in the effective taxonomy; values missing from the taxonomy keep their raw
/// text as label.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AppointmentExport {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub status_label: String,
    pub priority: String,
    pub priority_label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_label: String,
    pub participant: String,
    pub moderated_by: String,
}

impl AppointmentExport {
    pub fn from_appointment(a: &Appointment, taxonomy: Option<&TaxonomyConfig>) -> Self {
        let label = |field, value: &str| {
            classify(resolve_taxonomy(taxonomy, field), value)
                .label()
                .to_string()
        };

        Self {
            id: a.id.clone(),
            title: a.title.clone(),
            start_time: a.start_time.clone(),
            end_time: a.end_time.clone(),
            status: a.status.clone(),
            status_label: label(TaxonomyField::Statuses, &a.status),
            priority: a.priority.clone(),
            priority_label: label(TaxonomyField::Priorities, &a.priority),
            kind: a.kind.clone(),
            type_label: label(TaxonomyField::Types, &a.kind),
            participant: a
                .participant
                .as_ref()
                .and_then(|p| p.name.clone())
                .unwrap_or_default(),
            moderated_by: a
                .moderation
                .as_ref()
                .and_then(|m| m.moderated_by.clone())
                .unwrap_or_default(),
        }
    }
}
