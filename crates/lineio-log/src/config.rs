use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::message::LogLevel;

/// Settings for a [`MessageLog`](crate::MessageLog).
///
/// ```toml
/// capacity = 1000
/// max_level = "info"
/// default_name = "lineio"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageLogConfig {
    /// Maximum number of records retained; the oldest are evicted first.
    pub capacity: usize,
    /// Most verbose level shown by [`MessageLog::visible`](crate::MessageLog::visible).
    pub max_level: LogLevel,
    /// Name given to polled records that arrive without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,
}

impl Default for MessageLogConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            max_level: LogLevel::Info,
            default_name: None,
        }
    }
}

impl MessageLogConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> LogResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> LogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> LogResult<String> {
        toml::to_string(self).map_err(|e| LogError::Config(e.to_string()))
    }

    pub fn validate(&self) -> LogResult<()> {
        if self.capacity == 0 {
            return Err(LogError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }
}
