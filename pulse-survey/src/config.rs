//! Engine settings, loadable from TOML.
//!
//! ```toml
//! page_size = 3
//! retention_days = 7
//! key_prefix = "survey-progress"
//! ```

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::pagination::PAGE_SIZE;
use crate::snapshot::DEFAULT_KEY_PREFIX;

/// Days a saved snapshot stays resumable.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Questions per Part A page.
    pub page_size: usize,

    /// Snapshots older than this many days are discarded on load.
    pub retention_days: i64,

    /// Prefix of every storage key.
    pub key_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            retention_days: DEFAULT_RETENTION_DAYS,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and check a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        let config: Self =
            toml::from_str(content).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.page_size == 0 {
            return Err(EngineError::Config("page_size must be positive".into()));
        }
        if self.retention_days <= 0 {
            return Err(EngineError::Config("retention_days must be positive".into()));
        }
        if self.key_prefix.is_empty() {
            return Err(EngineError::Config("key_prefix must not be empty".into()));
        }
        Ok(())
    }

    pub fn retention(&self) -> Duration {
        Duration::days(self.retention_days)
    }
}
