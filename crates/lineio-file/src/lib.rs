//! Line-oriented reads and writes over raw, seekable byte streams.
//!
//! The stream underneath only needs three primitives (see [`RawStream`]):
//! a bounded read that may return short, a full write, and a seek. There is
//! no "read a line" primitive; [`read_line`] assembles lines from chunked
//! reads and seeks back over any bytes it read past the newline.
//!
//! # Operations
//!
//! - [`read_line`] -- one line into a caller buffer, NUL-terminated
//! - [`write_line`] -- text plus the platform end-of-line marker
//! - [`write_formatted`] -- rendered `format_args!` text, no terminator
//! - [`LineReader`] -- line-at-a-time iteration over a stream
//!
//! # Design Rules
//!
//! 1. Only one line buffer exists per call; there is no read-ahead cache.
//! 2. Bytes are never converted between encodings.
//! 3. A stream is used by one caller at a time; nothing here locks.
//! 4. Transport errors are returned unchanged and never logged.

pub mod line;
pub mod reader;
pub mod stream;

#[cfg(test)]
pub(crate) mod testing;

pub use line::{read_line, write_formatted, write_line, CHUNK_SIZE, NATIVE_EOL};
pub use reader::{LineReader, DEFAULT_LINE_CAPACITY};
pub use stream::{RawStream, StdStream};
