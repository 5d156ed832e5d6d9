use lovelace_common::Messages;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "lovelace.config.json";

/// Lovelace CLI configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dashboard document, relative to the config directory
    #[serde(default = "default_dashboard")]
    pub dashboard: String,

    /// Pretty-print saved dashboards
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Undo levels kept while applying edits (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Message overrides, keyed like the built-in catalog
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<String, String>,
}

fn default_dashboard() -> String {
    "ui-lovelace.json".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_history_limit() -> usize {
    100
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Dashboard to operate on: explicit override, else the configured one
    pub fn dashboard_path(&self, cwd: &Path, file: Option<&Path>) -> PathBuf {
        match file {
            Some(file) => cwd.join(file),
            None => cwd.join(&self.dashboard),
        }
    }

    /// English catalog with configured overrides applied
    pub fn messages(&self) -> Messages {
        Messages::english().with_overrides(self.messages.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            pretty: default_pretty(),
            history_limit: default_history_limit(),
            messages: HashMap::new(),
        }
    }
}
