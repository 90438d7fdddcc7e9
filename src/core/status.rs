//! Committing a status change through the moderation gate.
//!
//! Disabling the status field in a form is not a security boundary, so the
//! predicate is evaluated again here, where the new value is actually applied.

use crate::core::permission::can_modify_status;
use crate::models::{Appointment, Moderation, UserRole};
use chrono::{DateTime, FixedOffset};
use log::info;

/// Who is attempting the change.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    pub role: Option<UserRole>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCommit {
    /// Updated copy; the caller stores it back.
    Applied(Appointment),
    Unchanged,
    Denied { role: Option<UserRole> },
}

pub fn commit_status(
    appointment: &Appointment,
    new_status: &str,
    actor: &Actor,
    moderation_enabled: bool,
    now: DateTime<FixedOffset>,
) -> StatusCommit {
    if !can_modify_status(actor.role, moderation_enabled) {
        return StatusCommit::Denied { role: actor.role };
    }

    if appointment.status == new_status {
        return StatusCommit::Unchanged;
    }

    let stamp = now.to_rfc3339();
    let mut updated = appointment.clone();
    updated.status = new_status.to_string();
    updated.updated_at = stamp.clone();

    if moderation_enabled {
        let notes = appointment.moderation.as_ref().and_then(|m| m.notes.clone());
        updated.moderation = Some(Moderation {
            moderated_by: actor
                .name
                .clone()
                .or_else(|| actor.role.map(|r| r.to_string())),
            moderated_at: Some(stamp),
            notes,
        });
    }

    info!(
        "appointment {}: status {} -> {}",
        appointment.id, appointment.status, new_status
    );
    StatusCommit::Applied(updated)
}
