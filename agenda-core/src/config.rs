//! Global agenda configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use config::{Config, File};
use serde::Deserialize;

use crate::error::{AgendaError, AgendaResult};
use crate::persist::DEFAULT_FILE_NAME;
use crate::reminder::{
    DEFAULT_LOOKAHEAD_MINUTES, DEFAULT_PERIOD_SECS, MAX_LOOKAHEAD_MINUTES, MAX_PERIOD_SECS,
    ReminderPoller,
};

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_reminder_interval_secs() -> u64 {
    DEFAULT_PERIOD_SECS
}

fn default_lookahead_minutes() -> i64 {
    DEFAULT_LOOKAHEAD_MINUTES
}

/// Configuration at ~/.config/agenda/config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct AgendaConfig {
    /// Where events are saved to and loaded from
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,

    #[serde(default = "default_lookahead_minutes")]
    pub lookahead_minutes: i64,

    /// Also show reminders as desktop notifications
    #[serde(default)]
    pub desktop_notifications: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_file: default_data_file(),
            reminder_interval_secs: default_reminder_interval_secs(),
            lookahead_minutes: default_lookahead_minutes(),
            desktop_notifications: false,
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file on first run.
    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        let config: AgendaConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AgendaResult<()> {
        if !(1..=MAX_PERIOD_SECS).contains(&self.reminder_interval_secs) {
            return Err(AgendaError::Config(format!(
                "reminder_interval_secs must be between 1 and {}",
                MAX_PERIOD_SECS
            )));
        }
        if !(1..=MAX_LOOKAHEAD_MINUTES).contains(&self.lookahead_minutes) {
            return Err(AgendaError::Config(format!(
                "lookahead_minutes must be between 1 and {}",
                MAX_LOOKAHEAD_MINUTES
            )));
        }
        Ok(())
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned())
    }

    /// Build the reminder poller, rejecting out-of-range values.
    pub fn poller(&self) -> AgendaResult<ReminderPoller> {
        self.validate()?;
        let lookahead = TimeDelta::try_minutes(self.lookahead_minutes).ok_or_else(|| {
            AgendaError::Config(format!(
                "lookahead_minutes {} is out of range",
                self.lookahead_minutes
            ))
        })?;

        Ok(ReminderPoller::new(
            Duration::from_secs(self.reminder_interval_secs),
            lookahead,
        ))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# File events are saved to and loaded from:
# data_file = \"{}\"

# Seconds between reminder scans:
# reminder_interval_secs = {}

# Minutes ahead an event counts as upcoming:
# lookahead_minutes = {}

# Show reminders as desktop notifications too:
# desktop_notifications = false
",
            DEFAULT_FILE_NAME, DEFAULT_PERIOD_SECS, DEFAULT_LOOKAHEAD_MINUTES
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
