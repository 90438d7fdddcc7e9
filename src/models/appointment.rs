use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A scheduled appointment as supplied by the host application.
///
/// Timestamps are kept as the raw strings the host handed over: a record with a
/// malformed `start_time`/`end_time` still loads, it just never shows up in a
/// date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AppointmentRecord", into = "AppointmentRecord")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub priority: String,
    pub kind: String,
    pub participant: Option<Participant>,
    pub moderation: Option<Moderation>,
    pub created_at: String,
    pub updated_at: String,
}

/// Contact details of whoever the appointment is booked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Present only on appointments whose status went through the moderation gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Moderation {
    pub moderated_by: Option<String>,
    pub moderated_at: Option<String>,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.start_time)
    }

    pub fn end(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.end_time)
    }

    /// Start and end dates as seen from `zone`, or None if either timestamp
    /// does not parse.
    pub fn date_span(&self, zone: &FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.start()?.with_timezone(zone).date_naive();
        let end = self.end()?.with_timezone(zone).date_naive();
        Some((start, end))
    }

    pub fn is_moderated(&self) -> bool {
        self.moderation.is_some()
    }

    /// Edit-boundary check: both timestamps parse and `end > start`.
    pub fn validate_interval(&self) -> AppResult<()> {
        let start = self
            .start()
            .ok_or_else(|| AppError::InvalidTimestamp(self.start_time.clone()))?;
        let end = self
            .end()
            .ok_or_else(|| AppError::InvalidTimestamp(self.end_time.clone()))?;

        if end <= start {
            return Err(AppError::InvalidInterval(self.id.clone()));
        }
        Ok(())
    }
}

/// Flat wire shape, matching the camelCase records JavaScript hosts produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppointmentRecord {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    start_time: String,
    end_time: String,
    status: String,
    priority: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    participant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    participant_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    participant_phone: Option<String>,
    #[serde(default)]
    is_moderated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moderated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moderated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moderation_notes: Option<String>,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

impl From<AppointmentRecord> for Appointment {
    fn from(r: AppointmentRecord) -> Self {
        let participant = if r.participant_name.is_some()
            || r.participant_email.is_some()
            || r.participant_phone.is_some()
        {
            Some(Participant {
                name: r.participant_name,
                email: r.participant_email,
                phone: r.participant_phone,
            })
        } else {
            None
        };

        let moderation = r.is_moderated.then_some(Moderation {
            moderated_by: r.moderated_by,
            moderated_at: r.moderated_at,
            notes: r.moderation_notes,
        });

        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            start_time: r.start_time,
            end_time: r.end_time,
            status: r.status,
            priority: r.priority,
            kind: r.kind,
            participant,
            moderation,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<Appointment> for AppointmentRecord {
    fn from(a: Appointment) -> Self {
        let participant = a.participant.unwrap_or_default();
        let is_moderated = a.moderation.is_some();
        let moderation = a.moderation.unwrap_or_default();

        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            start_time: a.start_time,
            end_time: a.end_time,
            status: a.status,
            priority: a.priority,
            kind: a.kind,
            participant_name: participant.name,
            participant_email: participant.email,
            participant_phone: participant.phone,
            is_moderated,
            moderated_by: moderation.moderated_by,
            moderated_at: moderation.moderated_at,
            moderation_notes: moderation.notes,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
