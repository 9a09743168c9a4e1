use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_max_definitions() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub render_mode: RenderMode,
    /// Definitions shown per part of speech in structured mode
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let render_mode = env::var("RENDER_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            render_mode,
            max_definitions: default_max_definitions(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            max_definitions: default_max_definitions(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Headword, part of speech, definitions and examples
    #[default]
    Structured,
    /// The raw entry as pretty-printed JSON
    Json,
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(RenderMode::Structured),
            "json" => Ok(RenderMode::Json),
            other => Err(ConfigError::InvalidValue {
                field: "render_mode",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Structured => f.write_str("structured"),
            RenderMode::Json => f.write_str("json"),
        }
    }
}
