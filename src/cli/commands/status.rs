use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::{Actor, StatusCommit, commit_status};
use crate::core::taxonomy::{Classification, classify, resolve_taxonomy};
use crate::errors::{AppError, AppResult};
use crate::models::{TaxonomyField, UserRole};
use crate::store::AppointmentStore;
use crate::ui::messages::{denied, info, success};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        id,
        value,
        role,
        actor,
    } = cmd
    {
        let role: Option<UserRole> = match role {
            Some(r) => Some(r.parse()?),
            None => cfg.role,
        };
        let actor = Actor {
            role,
            name: actor.clone().or_else(|| cfg.actor.clone()),
        };

        let statuses = resolve_taxonomy(cfg.taxonomy.as_ref(), TaxonomyField::Statuses);
        match classify(statuses, value) {
            Classification::Known(o) if !o.disabled => {}
            _ => {
                return Err(AppError::UnknownOption {
                    field: TaxonomyField::Statuses.singular(),
                    value: value.clone(),
                });
            }
        }

        let mut store = AppointmentStore::open(&cfg.appointments_file)?;
        let current = store.find(id)?;

        match commit_status(
            current,
            value,
            &actor,
            cfg.moderation_enabled,
            Local::now().fixed_offset(),
        ) {
            StatusCommit::Applied(updated) => {
                let from = current.status.clone();
                store.replace(updated)?;
                store.save()?;
                success(format!("Appointment {id}: status {from} → {value}"));
            }
            StatusCommit::Unchanged => {
                info(format!("Appointment {id} already has status {value}"));
            }
            StatusCommit::Denied { role } => {
                let role = role.map_or("none".to_string(), |r| r.to_string());
                denied(format!(
                    "Only moderators and admins may change appointment status (role: {role})"
                ));
                return Err(AppError::StatusChangeDenied(role));
            }
        }
    }
    Ok(())
}
