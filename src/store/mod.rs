//! File-backed appointment collection used by the terminal host.
//!
//! `.json` files are read and written as JSON, everything else as YAML. Both
//! hold a plain list of appointment records.

use crate::errors::{AppError, AppResult};
use crate::models::Appointment;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

pub struct AppointmentStore {
    path: PathBuf,
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Open the store; a missing file is an empty collection.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let appointments = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let loaded = parse(&content, FileFormat::of(&path))?;
            // kept as stored; such records never land in a day bucket
            for a in &loaded {
                if let Err(e) = a.validate_interval() {
                    warn!("{}: appointment {}: {e}", path.display(), a.id);
                }
            }
            loaded
        } else {
            debug!("appointment file {} not found, starting empty", path.display());
            Vec::new()
        };

        Ok(Self { path, appointments })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn find(&self, id: &str) -> AppResult<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::AppointmentNotFound(id.to_string()))
    }

    /// Replace the record with the same id.
    pub fn replace(&mut self, updated: Appointment) -> AppResult<()> {
        let slot = self
            .appointments
            .iter_mut()
            .find(|a| a.id == updated.id)
            .ok_or_else(|| AppError::AppointmentNotFound(updated.id.clone()))?;
        *slot = updated;
        Ok(())
    }

    /// Insert a new record after checking its interval.
    pub fn insert(&mut self, appointment: Appointment) -> AppResult<()> {
        appointment.validate_interval()?;
        if self.appointments.iter().any(|a| a.id == appointment.id) {
            return Err(AppError::DuplicateAppointment(appointment.id));
        }
        self.appointments.push(appointment);
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let content = match FileFormat::of(&self.path) {
            FileFormat::Json => serde_json::to_string_pretty(&self.appointments)?,
            FileFormat::Yaml => serde_yaml::to_string(&self.appointments)?,
        };
        fs::write(&self.path, content)?;
        info!(
            "{} appointments written to {}",
            self.appointments.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn parse(content: &str, format: FileFormat) -> AppResult<Vec<Appointment>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(match format {
        FileFormat::Json => serde_json::from_str(content)?,
        FileFormat::Yaml => serde_yaml::from_str(content)?,
    })
}
