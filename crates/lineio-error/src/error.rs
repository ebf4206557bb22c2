use std::fmt;
use std::io;

/// Codes raised by the lineio crates themselves.
///
/// Positive values are OS error numbers carried over from `std::io::Error`.
/// Negative values are reserved for this workspace.
pub mod codes {
    /// No specific code.
    pub const UNSPECIFIED: i32 = 0;
    /// A read reached end-of-stream before producing any data.
    pub const END_OF_STREAM: i32 = -1;
}

/// Message used when `std::fmt` machinery fails to render a message.
pub const FORMAT_FAILED_MESSAGE: &str = "Unable to format message.";

/// An owned error value: a numeric code plus a rendered message.
///
/// The message is never empty. Values are moved between owners, never
/// copied; see [`ErrorSlot`](crate::ErrorSlot) for the out-parameter form.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: i32,
    message: String,
}

impl Error {
    /// Create an error from a literal or pre-rendered message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "error message must not be empty");
        Self { code, message }
    }

    /// Create an error from a format template.
    ///
    /// ```
    /// use lineio_error::Error;
    ///
    /// let err = Error::from_args(2, format_args!("missing file {}", "a.txt"));
    /// assert_eq!(err.message(), "missing file a.txt");
    /// ```
    pub fn from_args(code: i32, args: fmt::Arguments<'_>) -> Self {
        Self::new(code, fmt::format(args))
    }

    /// The "no data" condition reported when a read hits end-of-stream first.
    pub fn end_of_stream() -> Self {
        Self::new(
            codes::END_OF_STREAM,
            "end of stream reached before any data was read",
        )
    }

    /// The logical error reported when message rendering fails.
    pub fn format_failed() -> Self {
        Self::new(codes::UNSPECIFIED, FORMAT_FAILED_MESSAGE)
    }

    /// Domain-defined error code (0 means unspecified).
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for the end-of-stream condition.
    pub fn is_end_of_stream(&self) -> bool {
        self.code == codes::END_OF_STREAM
    }

    /// Prepend rendered text to the message in place. The code is unchanged.
    pub fn prefix(&mut self, prefix: impl fmt::Display) {
        self.message = format!("{prefix}{}", self.message);
    }

    /// Owned variant of [`prefix`](Self::prefix).
    pub fn with_prefix(mut self, prefix: impl fmt::Display) -> Self {
        self.prefix(prefix);
        self
    }

    /// Split into `(code, message)`.
    pub fn into_parts(self) -> (i32, String) {
        (self.code, self.message)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let code = err.raw_os_error().unwrap_or(codes::UNSPECIFIED);
        let mut message = err.to_string();
        if message.is_empty() {
            message = err.kind().to_string();
        }
        Self::new(code, message)
    }
}

/// Result alias used throughout the lineio crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;
