//! Tab-separated, one-record-per-line log files.
//!
//! Format (one record per line):
//! ```text
//! [asctime date]\t[level tag]\t[name]\t[message]
//! ```
//! The date uses `%a %b %e %T %Y` in UTC. Level tags are `error`, `debug`,
//! or five spaces for informational records. Tabs and line breaks inside
//! fields are written as spaces so that every record stays on one line.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use lineio_file::{write_formatted, write_line, LineReader, RawStream};
use tracing::debug;

use crate::error::{LogError, LogResult};
use crate::message::{LogLevel, LogMessage};

/// `asctime`-style timestamp format.
pub const ASCTIME_FORMAT: &str = "%a %b %e %T %Y";

/// Longest record `load_records` accepts, in bytes, terminator excluded.
pub const MAX_RECORD_LINE: usize = 16 * 1024;

// Room for a full record, its "\r\n", and the NUL `read_line` appends.
const LOAD_BUFFER: usize = MAX_RECORD_LINE + 3;

/// Write `records` to `stream`, each ended by the platform end-of-line
/// marker. Returns the number of records written.
///
/// Stops at the first failed write; records before it are complete.
pub fn save_records<'a, S, I>(stream: &mut S, records: I) -> LogResult<usize>
where
    S: RawStream + ?Sized,
    I: IntoIterator<Item = &'a LogMessage>,
{
    let mut written = 0;
    for record in records {
        write_formatted(
            stream,
            format_args!(
                "{}\t{}\t{}\t",
                record.when.format(ASCTIME_FORMAT),
                record.level.tag(),
                flatten(record.name.as_deref().unwrap_or("")),
            ),
        )?;
        write_line(stream, flatten(&record.message).as_bytes())?;
        written += 1;
    }
    debug!(records = written, "message log saved");
    Ok(written)
}

/// Parse every record in `stream`. Blank lines are skipped.
pub fn load_records<S: RawStream>(stream: S) -> LogResult<Vec<LogMessage>> {
    let mut reader = LineReader::with_capacity(stream, LOAD_BUFFER);
    let mut records = Vec::new();
    let mut line_no = 0;

    while let Some(line) = reader.next_line()? {
        line_no += 1;
        if line.is_empty() {
            continue;
        }
        if line.len() > MAX_RECORD_LINE {
            return Err(malformed(line_no, "record exceeds maximum line length"));
        }
        let text = std::str::from_utf8(line)
            .map_err(|e| malformed(line_no, format!("invalid UTF-8: {e}")))?;
        records.push(parse_record(line_no, text)?);
    }

    debug!(records = records.len(), "message log loaded");
    Ok(records)
}

fn parse_record(line_no: usize, text: &str) -> LogResult<LogMessage> {
    let mut fields = text.splitn(4, '\t');
    let (Some(date), Some(tag), Some(name), Some(message)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed(line_no, "expected 4 tab-separated fields"));
    };

    let when = NaiveDateTime::parse_from_str(date, ASCTIME_FORMAT)
        .map_err(|e| malformed(line_no, format!("bad timestamp {date:?}: {e}")))?
        .and_utc();
    let level = LogLevel::from_tag(tag)
        .ok_or_else(|| malformed(line_no, format!("unknown level {tag:?}")))?;

    Ok(LogMessage {
        when,
        level,
        name: (!name.is_empty()).then(|| name.to_string()),
        message: message.to_string(),
    })
}

fn flatten(field: &str) -> Cow<'_, str> {
    if field.contains(['\t', '\n', '\r']) {
        Cow::Owned(field.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(field)
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> LogError {
    LogError::Malformed {
        line,
        reason: reason.into(),
    }
}
