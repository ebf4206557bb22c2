//! Bounded message log with severity filtering and line-oriented persistence.
//!
//! This is the non-visual core behind a log viewer: records are drained
//! from an external queue into a fixed-size ring, filtered by severity for
//! display, cleared on request, and saved to or loaded from any
//! [`RawStream`](lineio_file::RawStream) using the line layer.
//!
//! # Key Types
//!
//! - [`MessageLog`] -- the ring and its display filter
//! - [`LogMessage`] / [`LogLevel`] -- one record and its severity
//! - [`MessageLogConfig`] -- capacity, default filter and default name, loadable from TOML

pub mod config;
pub mod error;
pub mod log;
pub mod message;
pub mod persist;

pub use config::MessageLogConfig;
pub use error::{LogError, LogResult};
pub use log::MessageLog;
pub use message::{LogLevel, LogMessage};
pub use persist::{load_records, save_records, ASCTIME_FORMAT};
