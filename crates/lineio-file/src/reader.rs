use lineio_error::Result;

use crate::line::read_line;
use crate::stream::RawStream;

/// Line buffer size used by [`LineReader::new`].
pub const DEFAULT_LINE_CAPACITY: usize = 4096;

/// Reads a stream line by line through a single owned line buffer.
///
/// End-of-stream is reported as `Ok(None)` instead of an error. Lines longer
/// than the buffer come back in several pieces, as with [`read_line`].
pub struct LineReader<S> {
    stream: S,
    buffer: Vec<u8>,
    lines_read: usize,
}

impl<S: RawStream> LineReader<S> {
    /// Create a reader with a [`DEFAULT_LINE_CAPACITY`] buffer.
    pub fn new(stream: S) -> Self {
        Self::with_capacity(stream, DEFAULT_LINE_CAPACITY)
    }

    /// Create a reader whose buffer holds `capacity` bytes, terminator included.
    pub fn with_capacity(stream: S, capacity: usize) -> Self {
        assert!(capacity > 0, "line capacity must be non-zero");
        Self {
            stream,
            buffer: vec![0; capacity],
            lines_read: 0,
        }
    }

    /// Read the next line, without its terminator.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        match read_line(&mut self.stream, &mut self.buffer) {
            Ok(len) => {
                self.lines_read += 1;
                Ok(Some(&self.buffer[..len]))
            }
            Err(e) if e.is_end_of_stream() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Number of lines returned so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Buffer capacity, terminator included.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Unwrap the underlying stream, positioned after the last line read.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::write_line;
    use crate::stream::StdStream;
    use crate::testing::{FakeStream, Fault};
    use std::fs::{File, OpenOptions};

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.txt");

        {
            let file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .read(true)
                .write(true)
                .open(&path)
                .unwrap();
            let mut stream = StdStream::new(file);
            write_line(&mut stream, "download-dir=/srv/data").unwrap();
            write_line(&mut stream, "").unwrap();
            write_line(&mut stream, "peer-port=51413").unwrap();
        }

        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let mut reader = LineReader::with_capacity(StdStream::new(file), 64);
        assert_eq!(reader.next_line().unwrap(), Some(&b"download-dir=/srv/data"[..]));
        assert_eq!(reader.next_line().unwrap(), Some(&b""[..]));
        assert_eq!(reader.next_line().unwrap(), Some(&b"peer-port=51413"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn crlf_file_without_final_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, b"one\r\ntwo\r\nthree").unwrap();

        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let mut reader = LineReader::new(StdStream::new(file));
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(String::from_utf8(line.to_vec()).unwrap());
        }
        assert_eq!(lines, ["one", "two", "three"]);
    }

    #[test]
    fn stream_is_left_after_last_line_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.txt");
        std::fs::write(&path, b"HEADER\nbody bytes").unwrap();

        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let mut reader = LineReader::new(StdStream::new(file));
        assert_eq!(reader.next_line().unwrap(), Some(&b"HEADER"[..]));

        let mut file: File = reader.into_inner().into_inner();
        let mut rest = String::new();
        std::io::Read::read_to_string(&mut file, &mut rest).unwrap();
        assert_eq!(rest, "body bytes");
    }

    #[test]
    fn transport_errors_are_not_end_of_stream() {
        let stream = FakeStream::new(b"abc\n").fail_on(Fault::Read(1));
        let mut reader = LineReader::new(stream);
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.code(), FakeStream::READ_FAULT_CODE);
    }

    #[test]
    fn long_lines_come_back_in_pieces() {
        let mut reader = LineReader::with_capacity(FakeStream::new(b"abcdefg\n"), 4);
        assert_eq!(reader.capacity(), 4);
        assert_eq!(reader.next_line().unwrap(), Some(&b"abc"[..]));
        assert_eq!(reader.next_line().unwrap(), Some(&b"def"[..]));
        assert_eq!(reader.next_line().unwrap(), Some(&b"g"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
    }
}
