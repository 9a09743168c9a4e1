use std::env;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

pub use self::ui::RenderMode;

fn default_debounce_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,

    /// Quiet period a selection must stay unchanged before it is looked up
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// What happens to the shown entry when a lookup fails
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let failure_policy = env::var("FAILURE_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Config {
            dictionary: DictionaryConfig::new(),
            ui: UiConfig::new(),

            debounce_ms,
            failure_policy,
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            ui: UiConfig::default(),
            debounce_ms: default_debounce_ms(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Display policy for failed lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep showing the last successfully fetched entry
    #[default]
    Retain,
    /// Clear the view
    Clear,
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(FailurePolicy::Retain),
            "clear" => Ok(FailurePolicy::Clear),
            other => Err(ConfigError::InvalidValue {
                field: "failure_policy",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Retain => f.write_str("retain"),
            FailurePolicy::Clear => f.write_str("clear"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
