// LogReport - core/aggregate.rs
//
// Single-pass aggregation over a sequence of log lines.
// Core layer: accepts `&str` lines or any `BufRead`, never opens files itself.
//
// State only ever grows. A line that fails to classify leaves everything
// untouched apart from the scan statistics.

use crate::core::model::{ElapsedSpan, LogEntry, Severity, SeverityCounts, Summary};
use crate::core::parser;
use crate::util::logging::preview;
use chrono::NaiveDateTime;
use std::io::{self, BufRead};

/// Byte-order mark some Windows tools write at the start of UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// Counters describing how the input lines were handled.
///
/// Diagnostic only; none of these values reach the reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Every line handed to the aggregator, blank or not.
    pub lines_read: u64,
    pub blank_lines: u64,
    /// Non-blank lines that did not match the record grammar.
    pub malformed_lines: u64,
    /// Records whose level text is not ERROR, WARNING or INFO.
    pub unrecognized_levels: u64,
    /// Records whose timestamp field did not parse.
    pub unparseable_timestamps: u64,
}

/// Running state of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationState {
    pub counts: SeverityCounts,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    pub error_messages: Vec<String>,
    /// Records with a recognised severity. Always equals `counts.total()`.
    pub total_entries: usize,
    pub stats: ScanStats,
}

/// Drives [`AggregationState`] over the lines of one log file.
#[derive(Debug, Default)]
pub struct LogAggregator {
    state: AggregationState,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    /// Process one line (without its line terminator).
    pub fn ingest_line(&mut self, line: &str) {
        self.state.stats.lines_read += 1;

        if line.trim().is_empty() {
            self.state.stats.blank_lines += 1;
            return;
        }

        let Some(entry) = parser::parse_line(line) else {
            self.state.stats.malformed_lines += 1;
            tracing::trace!(line = preview(line), "Line does not match record grammar");
            return;
        };

        tracing::trace!(
            level = %entry.level,
            has_timestamp = entry.timestamp.is_some(),
            message = preview(&entry.message),
            "Record classified"
        );

        self.apply(entry);
    }

    fn apply(&mut self, entry: LogEntry) {
        let state = &mut self.state;

        match entry.timestamp {
            Some(ts) => {
                state.first_timestamp.get_or_insert(ts);
                state.last_timestamp = Some(ts);
            }
            None => state.stats.unparseable_timestamps += 1,
        }

        if state.counts.increment(entry.severity) {
            state.total_entries += 1;
        } else {
            state.stats.unrecognized_levels += 1;
            tracing::debug!(level = %entry.level, "Record with unrecognised level not counted");
        }

        if entry.severity == Severity::Error {
            state
                .error_messages
                .push(parser::format_error_message(entry.timestamp, &entry.message));
        }
    }

    /// Feed every line of `reader` through [`ingest_line`](Self::ingest_line).
    ///
    /// Lines are split on `\n`, a trailing `\r` is dropped, and invalid UTF-8
    /// is replaced rather than rejected. A UTF-8 byte-order mark at the very
    /// start of the reader is skipped. Returns the number of lines read from
    /// this reader. An I/O error stops the pass; lines already ingested stay
    /// counted.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut buf = Vec::new();
        let mut lines: u64 = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = String::from_utf8_lossy(&buf);
            let line = if lines == 0 {
                line.strip_prefix(UTF8_BOM).unwrap_or(&line)
            } else {
                &line
            };
            self.ingest_line(line);
            lines += 1;
        }
        Ok(lines)
    }

    /// Build the immutable [`Summary`] for the lines seen so far.
    pub fn summary(&self) -> Summary {
        Summary::from(&self.state)
    }
}

impl From<&AggregationState> for Summary {
    fn from(state: &AggregationState) -> Self {
        let elapsed = match (state.first_timestamp, state.last_timestamp) {
            (Some(first), Some(last)) => ElapsedSpan::between(first, last),
            _ => ElapsedSpan::zero(),
        };
        Summary {
            total_entries: state.total_entries,
            counts: state.counts,
            elapsed,
            error_messages: state.error_messages.clone(),
        }
    }
}
