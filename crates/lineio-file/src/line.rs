use std::fmt::{self, Write as _};
use std::io::SeekFrom;

use lineio_error::{Error, Result};
use tracing::trace;

use crate::stream::RawStream;

/// Largest single read issued while assembling a line.
pub const CHUNK_SIZE: usize = 1024;

/// End-of-line marker appended by [`write_line`].
#[cfg(windows)]
pub const NATIVE_EOL: &[u8] = b"\r\n";
/// End-of-line marker appended by [`write_line`].
#[cfg(not(windows))]
pub const NATIVE_EOL: &[u8] = b"\n";

/// Read one line from `stream` into `buffer` and NUL-terminate it.
///
/// Returns the line length, which is also the index of the terminating NUL.
///
/// - `"\n"` and `"\r\n"` terminators are both removed.
/// - Bytes read past the newline are pushed back with a relative seek, so
///   the next call starts exactly at the next line.
/// - A line longer than `buffer.len() - 1` is truncated to fit; the rest
///   stays in the stream and is returned by the next call.
/// - A final line without terminator is returned as-is.
///
/// Fails with [`Error::end_of_stream`] when the stream is already exhausted,
/// and with the stream's own error when a read or seek fails.
///
/// # Panics
///
/// Panics if `buffer` is empty.
///
/// ```
/// use std::io::Cursor;
/// use lineio_file::{read_line, StdStream};
///
/// let mut stream = StdStream::new(Cursor::new(b"hello world\nGOODBYE\n".to_vec()));
/// let mut buf = [0u8; 16];
/// let len = read_line(&mut stream, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"hello world");
/// assert_eq!(buf[len], 0);
/// ```
pub fn read_line<S>(stream: &mut S, buffer: &mut [u8]) -> Result<usize>
where
    S: RawStream + ?Sized,
{
    assert!(!buffer.is_empty(), "line buffer must have room for the terminator");

    // Last byte is reserved for the NUL.
    let limit = buffer.len() - 1;
    let mut offset = 0;

    while offset < limit {
        let wanted = (limit - offset).min(CHUNK_SIZE);
        let bytes_read = stream.read(&mut buffer[offset..offset + wanted])?;
        debug_assert!(bytes_read <= wanted);

        if bytes_read == 0 {
            if offset == 0 {
                return Err(Error::end_of_stream());
            }
            break;
        }

        let chunk = &buffer[offset..offset + bytes_read];
        if let Some(pos) = chunk.iter().position(|&b| b == b'\n') {
            let over_read = bytes_read - pos - 1;
            if over_read > 0 {
                trace!(over_read, "pushing back bytes read past newline");
                stream.seek(SeekFrom::Current(-(over_read as i64)))?;
            }

            let mut end = offset + pos;
            if end > 0 && buffer[end - 1] == b'\r' {
                end -= 1;
            }
            buffer[end] = 0;
            return Ok(end);
        }

        offset += bytes_read;
    }

    if offset == limit {
        trace!(capacity = buffer.len(), "line truncated to buffer capacity");
    }
    buffer[offset] = 0;
    Ok(offset)
}

/// Write `text` followed by [`NATIVE_EOL`].
///
/// The terminator is not attempted if writing `text` fails.
pub fn write_line<S>(stream: &mut S, text: impl AsRef<[u8]>) -> Result<()>
where
    S: RawStream + ?Sized,
{
    stream.write(text.as_ref())?;
    stream.write(NATIVE_EOL)
}

/// Render `args` and write the result without a terminator.
///
/// A rendering failure is reported as [`Error::format_failed`] and leaves
/// the stream untouched.
///
/// ```
/// use std::io::Cursor;
/// use lineio_file::{write_formatted, StdStream};
///
/// let mut stream = StdStream::new(Cursor::new(Vec::new()));
/// write_formatted(&mut stream, format_args!("{}={}", "port", 51413)).unwrap();
/// assert_eq!(stream.into_inner().into_inner(), b"port=51413");
/// ```
pub fn write_formatted<S>(stream: &mut S, args: fmt::Arguments<'_>) -> Result<()>
where
    S: RawStream + ?Sized,
{
    let mut rendered = String::new();
    if rendered.write_fmt(args).is_err() {
        return Err(Error::format_failed());
    }
    stream.write(rendered.as_bytes())
}
