use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::taxonomy::{Classification, classify, default_value, resolve_taxonomy};
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Participant, TaxonomyField};
use crate::store::AppointmentStore;
use crate::ui::messages::success;
use chrono::Local;

/// Value for a categorical field: the given one if the effective taxonomy
/// offers it, the taxonomy's preselected value otherwise.
fn pick(cfg: &Config, field: TaxonomyField, given: Option<&str>) -> AppResult<String> {
    let options = resolve_taxonomy(cfg.taxonomy.as_ref(), field);

    match given {
        Some(v) => match classify(options, v) {
            Classification::Known(o) if !o.disabled => Ok(o.value.clone()),
            _ => Err(AppError::UnknownOption {
                field: field.singular(),
                value: v.to_string(),
            }),
        },
        None => default_value(options)
            .map(str::to_string)
            .ok_or_else(|| AppError::Config(format!("no selectable {} option", field.singular()))),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        id,
        title,
        start,
        end,
        status,
        priority,
        kind,
        description,
        participant,
    } = cmd
    {
        let now = Local::now().fixed_offset().to_rfc3339();

        let appointment = Appointment {
            id: id.clone(),
            title: title.clone(),
            description: description.clone(),
            start_time: start.clone(),
            end_time: end.clone(),
            status: pick(cfg, TaxonomyField::Statuses, status.as_deref())?,
            priority: pick(cfg, TaxonomyField::Priorities, priority.as_deref())?,
            kind: pick(cfg, TaxonomyField::Types, kind.as_deref())?,
            participant: participant.as_ref().map(|name| Participant {
                name: Some(name.clone()),
                ..Default::default()
            }),
            moderation: None,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut store = AppointmentStore::open(&cfg.appointments_file)?;
        store.insert(appointment)?;
        store.save()?;

        success(format!("Appointment {id} added"));
    }
    Ok(())
}
