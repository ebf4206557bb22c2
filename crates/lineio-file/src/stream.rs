use std::io::{Read, Seek, SeekFrom, Write};

use lineio_error::Result;

/// Raw byte-stream capability consumed by the line layer.
///
/// Implementations must satisfy these rules:
/// - `read` may return fewer bytes than requested, even before the end of
///   the stream. `Ok(0)` means end-of-stream.
/// - `write` either writes all of `src` or fails.
/// - `seek` is relative to the origin in `pos` and returns the new absolute
///   position.
/// - Failures are reported only through the returned [`Error`](lineio_error::Error).
pub trait RawStream {
    /// Read up to `dest.len()` bytes into `dest`.
    fn read(&mut self, dest: &mut [u8]) -> Result<usize>;

    /// Write all of `src`.
    fn write(&mut self, src: &[u8]) -> Result<()>;

    /// Move the stream position.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64>;
}

impl<S: RawStream + ?Sized> RawStream for &mut S {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        (**self).read(dest)
    }

    fn write(&mut self, src: &[u8]) -> Result<()> {
        (**self).write(src)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }
}

impl<S: RawStream + ?Sized> RawStream for Box<S> {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        (**self).read(dest)
    }

    fn write(&mut self, src: &[u8]) -> Result<()> {
        (**self).write(src)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }
}

/// Adapts any `std::io` reader/writer/seeker (files, cursors) to [`RawStream`].
///
/// `io::Error`s are converted with their OS error number as the code.
#[derive(Debug)]
pub struct StdStream<T> {
    inner: T,
}

impl<T> StdStream<T> {
    /// Wrap an `std::io` stream.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + Seek> RawStream for StdStream<T> {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(dest) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn write(&mut self, src: &[u8]) -> Result<()> {
        self.inner.write_all(src)?;
        Ok(())
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.inner.seek(pos)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::OpenOptions;
    use std::io::Cursor;

    #[test]
    fn cursor_read_write_seek() {
        let mut stream = StdStream::new(Cursor::new(Vec::new()));
        stream.write(b"abcdef").unwrap();
        assert_eq!(stream.seek(SeekFrom::Current(-4)).unwrap(), 2);

        let mut buf = [0u8; 8];
        let n = stream.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"cdef");
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
        assert_eq!(stream.into_inner().into_inner(), b"abcdef");
    }

    #[test]
    fn seek_before_start_fails_with_error_value() {
        let mut stream = StdStream::new(Cursor::new(b"xy".to_vec()));
        let err = stream.seek(SeekFrom::Current(-5)).unwrap_err();
        assert!(!err.message().is_empty());
    }

    #[test]
    fn write_to_read_only_file_reports_os_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro.txt");
        std::fs::write(&path, b"data").unwrap();

        let file = OpenOptions::new().read(true).open(&path).unwrap();
        let mut stream = StdStream::new(file);
        let err = stream.write(b"more").unwrap_err();
        assert!(!err.message().is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), b"data");
    }

    #[test]
    fn forwards_through_mut_ref_and_box() {
        let mut stream = StdStream::new(Cursor::new(b"q".to_vec()));
        let mut by_ref: &mut StdStream<_> = &mut stream;
        let mut buf = [0u8; 1];
        assert_eq!(RawStream::read(&mut by_ref, &mut buf).unwrap(), 1);

        let mut boxed: Box<dyn RawStream> = Box::new(StdStream::new(Cursor::new(b"z".to_vec())));
        assert_eq!(boxed.read(&mut buf).unwrap(), 1);
        assert_eq!(&buf, b"z");
    }
}
