//! In-memory stream with short reads and injected faults, for tests.

use std::io::SeekFrom;

use lineio_error::{Error, Result};

use crate::stream::RawStream;

/// Which call should fail. Read and write counts are 1-based.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Fault {
    Read(usize),
    Write(usize),
    Seek,
}

pub(crate) struct FakeStream {
    data: Vec<u8>,
    pos: usize,
    max_read: usize,
    fault: Option<Fault>,
    reads: usize,
    writes: usize,
    requested: Vec<usize>,
    seeks: Vec<i64>,
}

impl FakeStream {
    pub(crate) const READ_FAULT_CODE: i32 = 5;
    pub(crate) const WRITE_FAULT_CODE: i32 = 28;
    pub(crate) const SEEK_FAULT_CODE: i32 = 29;

    pub(crate) fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            max_read: usize::MAX,
            fault: None,
            reads: 0,
            writes: 0,
            requested: Vec::new(),
            seeks: Vec::new(),
        }
    }

    /// Cap every read at `max_read` bytes.
    pub(crate) fn with_max_read(mut self, max_read: usize) -> Self {
        self.max_read = max_read;
        self
    }

    pub(crate) fn fail_on(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }

    pub(crate) fn rewind(&mut self) {
        self.pos = 0;
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    pub(crate) fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Sizes passed to `read`, in call order.
    pub(crate) fn requested(&self) -> &[usize] {
        &self.requested
    }

    /// Offsets of successful `SeekFrom::Current` seeks.
    pub(crate) fn seeks(&self) -> &[i64] {
        &self.seeks
    }

    pub(crate) fn write_calls(&self) -> usize {
        self.writes
    }
}

impl RawStream for FakeStream {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        self.reads += 1;
        self.requested.push(dest.len());
        if matches!(self.fault, Some(Fault::Read(n)) if n == self.reads) {
            return Err(Error::new(Self::READ_FAULT_CODE, "injected read failure"));
        }

        let available = self.data.len().saturating_sub(self.pos);
        let n = dest.len().min(self.max_read).min(available);
        if n > 0 {
            dest[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
        }
        Ok(n)
    }

    fn write(&mut self, src: &[u8]) -> Result<()> {
        self.writes += 1;
        if matches!(self.fault, Some(Fault::Write(n)) if n == self.writes) {
            return Err(Error::new(Self::WRITE_FAULT_CODE, "injected write failure"));
        }

        let end = self.pos + src.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(src);
        self.pos = end;
        Ok(())
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        if matches!(self.fault, Some(Fault::Seek)) {
            return Err(Error::new(Self::SEEK_FAULT_CODE, "injected seek failure"));
        }

        let (base, offset) = match pos {
            SeekFrom::Start(n) => (0i64, n as i64),
            SeekFrom::Current(n) => (self.pos as i64, n),
            SeekFrom::End(n) => (self.data.len() as i64, n),
        };
        let target = base + offset;
        if target < 0 {
            return Err(Error::new(22, "seek before start of stream"));
        }
        if let SeekFrom::Current(n) = pos {
            self.seeks.push(n);
        }
        self.pos = target as usize;
        Ok(self.pos as u64)
    }
}
