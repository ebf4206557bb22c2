/// Errors produced by the message log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Reading or writing the underlying stream failed.
    #[error("stream error: {0}")]
    Stream(#[from] lineio_error::Error),

    /// A saved record could not be parsed.
    #[error("malformed log record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The configuration is unreadable or out of range.
    #[error("invalid config: {0}")]
    Config(String),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for message log operations.
pub type LogResult<T> = Result<T, LogError>;
