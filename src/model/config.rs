use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from the optional config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, keyed by theme field name, values like "#FF4444"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. Logging is off when absent, the TUI owns stdout.
    #[serde(default)]
    pub file: Option<String>,
    /// tracing filter directive, e.g. "debug" or "taskit=trace"
    #[serde(default)]
    pub level: Option<String>,
}
