use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log record. Lower is more severe.
///
/// `Silent` is only meaningful as a display threshold: it hides everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Fixed-width tag written in saved logs.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Debug => "debug",
            _ => "     ",
        }
    }

    /// Inverse of [`tag`](Self::tag). Blank tags are `Info`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "error" => Some(Self::Error),
            "debug" => Some(Self::Debug),
            "" | "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Silent => "silent",
            Self::Error => "error",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// A single severity-tagged log record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogMessage {
    pub when: DateTime<Utc>,
    pub level: LogLevel,
    /// Component that produced the record, if known.
    pub name: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Create a record stamped with the current time.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            when: Utc::now(),
            level,
            name: None,
            message: message.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, when: DateTime<Utc>) -> Self {
        self.when = when;
        self
    }
}
