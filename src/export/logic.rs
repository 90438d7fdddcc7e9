// src/export/logic.rs

use crate::config::Config;
use crate::core::{agenda, bucket};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AppointmentExport;
use crate::models::{Appointment, ViewWindow};
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Rows to export, in agenda order.
    ///
    /// `range` accepts `YYYY-MM`, `YYYY-MM-DD` or `YYYY-MM-DD:YYYY-MM-DD`;
    /// None or `all` exports everything, including records whose timestamps
    /// do not parse.
    pub fn rows(
        appointments: &[Appointment],
        cfg: &Config,
        range: Option<&str>,
    ) -> AppResult<Vec<AppointmentExport>> {
        let all: Vec<&Appointment> = appointments.iter().collect();

        let selected = match range {
            None => all,
            Some(r) if r.eq_ignore_ascii_case("all") => all,
            Some(r) => {
                let (start, end) = parse_range(r)?;
                let window = ViewWindow {
                    start,
                    end,
                    cells: Vec::new(),
                };
                bucket::filter_by_window(&all, &window, &cfg.zone()?)
            }
        };

        Ok(agenda::sort_for_agenda(&selected)
            .into_iter()
            .map(|a| AppointmentExport::from_appointment(a, cfg.taxonomy.as_ref()))
            .collect())
    }

    pub fn export(
        appointments: &[Appointment],
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let rows = Self::rows(appointments, cfg, range)?;
        if rows.is_empty() {
            warning("No appointments found for selected range.");
            return Ok(());
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
