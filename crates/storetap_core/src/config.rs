//! Configuration for the storetap helper layer.

use crate::error::{Result, TapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Harness-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store discovery configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Report/log-sink configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from `storetap.toml` under `root`.
    ///
    /// A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("storetap.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| TapError::Config(format!("failed to read config: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| TapError::Config(format!("failed to parse config: {}", e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to `storetap.toml` under `root`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join("storetap.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| TapError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, content)
            .map_err(|e| TapError::Config(format!("failed to write config: {}", e)))?;
        Ok(())
    }
}

/// Where the application exposes its store on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Page global under which the store is exposed (default: "store").
    pub store_key: String,

    /// Page global under which the action-creator map is exposed
    /// (default: "actionCreators").
    pub creators_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_key: "store".to_string(),
            creators_key: "actionCreators".to_string(),
        }
    }
}

/// What gets recorded into the test report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Emit one log record per dispatched action (default: true).
    pub log_dispatches: bool,

    /// Emit a log record for each seeded visit (default: true).
    pub log_visits: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_dispatches: true,
            log_visits: true,
        }
    }
}
