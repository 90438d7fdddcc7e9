use crate::core::taxonomy;
use crate::core::view::ViewSettings;
use crate::core::window::week_start_from_index;
use crate::errors::{AppError, AppResult};
use crate::models::{TaxonomyConfig, UserRole};
use crate::utils::time::{TimeFormat, parse_offset};
use chrono::{FixedOffset, Weekday};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_appointments_file")]
    pub appointments_file: String,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default = "default_start_of_week")]
    pub start_of_week: u8,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub moderation_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<TaxonomyConfig>,
}

fn default_appointments_file() -> String {
    Config::config_dir()
        .join("appointments.yaml")
        .to_string_lossy()
        .to_string()
}
fn default_start_of_week() -> u8 {
    1
}
fn default_utc_offset() -> String {
    "+00:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appointments_file: default_appointments_file(),
            start_of_week: default_start_of_week(),
            time_format: TimeFormat::default(),
            utc_offset: default_utc_offset(),
            moderation_enabled: false,
            role: None,
            actor: None,
            taxonomy: None,
        }
    }
}

impl Config {
    /// Platform configuration directory, e.g. `~/.config/ragenda`.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ragenda")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ragenda.conf")
    }

    /// Load configuration from `path` (or the default location). A missing
    /// file yields the defaults; an invalid one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let default_path = Self::config_file();
        let path = path.unwrap_or(&default_path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        info!("configuration written to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        self.week_start()?;
        self.zone()?;
        if let Some(t) = &self.taxonomy {
            taxonomy::validate(t)?;
        }
        Ok(())
    }

    pub fn week_start(&self) -> AppResult<Weekday> {
        week_start_from_index(self.start_of_week)
    }

    pub fn zone(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.utc_offset)
    }

    pub fn view_settings(&self) -> AppResult<ViewSettings> {
        Ok(ViewSettings {
            week_start: self.week_start()?,
            zone: self.zone()?,
        })
    }

    /// Write a fresh configuration to `path` unless one exists already.
    /// Returns the configuration now in effect.
    pub fn init_at(path: &Path, appointments_file: Option<&str>) -> AppResult<Self> {
        if path.exists() {
            let mut cfg = Self::load(Some(path))?;
            if let Some(file) = appointments_file {
                cfg.appointments_file = file.to_string();
            }
            return Ok(cfg);
        }

        let mut cfg = Self::default();
        if let Some(file) = appointments_file {
            cfg.appointments_file = file.to_string();
        }
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl std::str::FromStr for Config {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Config = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
