//! Global eventry configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{EventryError, EventryResult};

/// File name of the event store inside the data directory.
pub const EVENT_FILE: &str = "events.csv";
/// File name of the attendee store inside the data directory.
pub const ATTENDEE_FILE: &str = "attendees.csv";

const DATA_DIR_ENV: &str = "EVENTRY_DATA_DIR";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("eventry"))
        .unwrap_or_else(|| PathBuf::from(".eventry"))
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/eventry/config.toml
///
/// `EVENTRY_DATA_DIR` overrides the configured data directory, which keeps
/// tests and scripted runs away from the user's real registry.
#[derive(Serialize, Deserialize, Clone)]
pub struct EventryConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for EventryConfig {
    fn default() -> Self {
        EventryConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl EventryConfig {
    pub fn config_path() -> EventryResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventryError::Config("Could not determine config directory".into()))?
            .join("eventry");

        Ok(config_dir.join("config.toml"))
    }

    /// Environment override first, then the config file, then defaults.
    pub fn load() -> EventryResult<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(EventryConfig {
                data_dir: PathBuf::from(dir),
            });
        }

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(EventryConfig::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| EventryError::Config(format!("Could not read config file: {e}")))?;

        toml::from_str(&content).map_err(|e| EventryError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/eventry/config.toml
    pub fn save(&self) -> EventryResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventryError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| EventryError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| EventryError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn event_file(&self) -> PathBuf {
        self.data_dir.join(EVENT_FILE)
    }

    pub fn attendee_file(&self) -> PathBuf {
        self.data_dir.join(ATTENDEE_FILE)
    }
}
