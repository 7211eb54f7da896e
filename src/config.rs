//! Configuration handling for the TUI

use crate::clock::{Clock, FixedClock, SystemClock};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins "today" (`YYYY-MM-DD`)
pub const TODAY_ENV: &str = "OPTICA_TODAY";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "optica_tui=warn";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Treat this date as today when validating the desired date
    pub pinned_date: Option<NaiveDate>,
    /// tracing-subscriber filter directive
    pub log_filter: Option<String>,
    /// Text values typed into the form at startup, keyed by raw field key
    #[serde(default)]
    pub prefill: BTreeMap<String, String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("es", "optica-boops", "optica-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(TODAY_ENV) {
            config.pinned_date = Some(parse_pinned_date(&raw)?);
        }

        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Clock the form validates against
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.pinned_date {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn parse_pinned_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("{TODAY_ENV} must be YYYY-MM-DD, got `{raw}`"))
}
