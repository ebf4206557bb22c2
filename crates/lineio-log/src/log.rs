use std::collections::VecDeque;

use lineio_file::RawStream;
use tracing::{debug, warn};

use crate::config::MessageLogConfig;
use crate::error::LogResult;
use crate::message::{LogLevel, LogMessage};
use crate::persist::{load_records, save_records};

/// A bounded ring of log records with a severity display filter.
///
/// Records are appended by draining an external queue with [`poll`](Self::poll).
/// When the ring is full the oldest record is evicted. A paused log leaves
/// the queue alone until it is resumed.
#[derive(Debug)]
pub struct MessageLog {
    records: VecDeque<LogMessage>,
    capacity: usize,
    max_level: LogLevel,
    default_name: Option<String>,
    paused: bool,
}

impl MessageLog {
    /// Create an empty log.
    ///
    /// # Panics
    ///
    /// Panics if `config.capacity` is zero; run [`MessageLogConfig::validate`] first.
    pub fn new(config: &MessageLogConfig) -> Self {
        assert!(config.capacity > 0, "message log capacity must be non-zero");
        Self {
            records: VecDeque::with_capacity(config.capacity.min(1024)),
            capacity: config.capacity,
            max_level: config.max_level,
            default_name: config.default_name.clone(),
            paused: false,
        }
    }

    /// Load a previously saved log, keeping the newest `config.capacity` records.
    ///
    /// Loaded records keep their saved names; the default name is not applied.
    pub fn load<S: RawStream>(stream: S, config: &MessageLogConfig) -> LogResult<Self> {
        config.validate()?;
        let mut log = Self::new(config);
        for record in load_records(stream)? {
            log.push(record);
        }
        Ok(log)
    }

    /// Append one record, evicting the oldest if full.
    pub fn push(&mut self, record: LogMessage) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Drain `queue` into the ring. Returns the number of records taken.
    ///
    /// While paused nothing is taken and `queue` is left untouched. Records
    /// without a name get the configured default name. Error records are
    /// also emitted as warnings.
    pub fn poll<I>(&mut self, queue: &mut I) -> usize
    where
        I: Iterator<Item = LogMessage>,
    {
        if self.paused {
            return 0;
        }

        let before = self.records.len();
        let mut taken = 0;
        for mut record in queue {
            if record.name.is_none() {
                record.name = self.default_name.clone();
            }
            if record.level == LogLevel::Error {
                warn!(name = record.name.as_deref().unwrap_or(""), "{}", record.message);
            }
            self.push(record);
            taken += 1;
        }
        let evicted = (before + taken).saturating_sub(self.records.len());
        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "message log full; dropped oldest records");
        }
        taken
    }

    /// Records at or below the current display level, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &LogMessage> + '_ {
        let max_level = self.max_level;
        self.records.iter().filter(move |r| r.level <= max_level)
    }

    /// All retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogMessage> + '_ {
        self.records.iter()
    }

    pub fn max_level(&self) -> LogLevel {
        self.max_level
    }

    pub fn set_max_level(&mut self, level: LogLevel) {
        self.max_level = level;
    }

    /// Stop or resume taking records in [`poll`](Self::poll).
    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            debug!(paused, "message log pause toggled");
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop every retained record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Save every retained record, regardless of the display filter.
    pub fn save<S: RawStream + ?Sized>(&self, stream: &mut S) -> LogResult<usize> {
        save_records(stream, &self.records)
    }
}
