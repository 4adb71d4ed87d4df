// LogReport - core/parser.rs
//
// Line classification and timestamp parsing.
// Core layer: works on `&str` lines, never touches the filesystem.
//
// Nothing in here returns an error for bad input. A line either classifies
// or it does not; a timestamp either parses or it does not.

use crate::core::model::{LogEntry, Severity};
use crate::util::constants;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// The three captured fields of a record line, borrowed from the line.
///
/// `level` is not yet upper-cased; see [`classify_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub message: &'a str,
}

fn line_pattern() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| Regex::new(constants::LINE_PATTERN).expect("LINE_PATTERN is valid"))
}

fn timestamp_shape() -> &'static Regex {
    static SHAPE_RE: OnceLock<Regex> = OnceLock::new();
    SHAPE_RE.get_or_init(|| {
        Regex::new(constants::TIMESTAMP_SHAPE_PATTERN).expect("TIMESTAMP_SHAPE_PATTERN is valid")
    })
}

/// Match `line` against the record grammar `[<ts>] [<level>] <message>`.
///
/// Returns `None` for lines that do not match, including blank lines.
/// The grammar accepts any level text; deciding whether it is a recognised
/// severity is left to the caller.
pub fn classify_line(line: &str) -> Option<RawRecord<'_>> {
    let caps = line_pattern().captures(line)?;
    Some(RawRecord {
        timestamp: caps.get(1)?.as_str(),
        level: caps.get(2)?.as_str(),
        message: caps.get(3)?.as_str(),
    })
}

/// Parse a timestamp field in the exact form `YYYY-MM-DD HH:MM:SS`.
///
/// chrono alone tolerates single-digit fields and padding, so the text is
/// shape-checked first. Out-of-range values (month 13, hour 24) fail in
/// chrono.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !timestamp_shape().is_match(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, constants::TIMESTAMP_FORMAT).ok()
}

/// Classify `line` and normalise its fields into a [`LogEntry`].
///
/// Blank and whitespace-only lines are rejected before the regex runs.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    if line.trim().is_empty() {
        return None;
    }
    let record = classify_line(line)?;
    let level = record.level.to_uppercase();
    Some(LogEntry {
        timestamp: parse_timestamp(record.timestamp),
        severity: Severity::from_label(&level),
        level,
        message: record.message.to_string(),
    })
}

/// Format an error record as `"[HH:MM:SS] <message>"`, substituting
/// `MISSING_TIME_PLACEHOLDER` when the timestamp did not parse.
pub fn format_error_message(timestamp: Option<NaiveDateTime>, message: &str) -> String {
    match timestamp {
        Some(ts) => format!("[{}] {message}", ts.format(constants::TIME_OF_DAY_FORMAT)),
        None => format!("[{}] {message}", constants::MISSING_TIME_PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    // -------------------------------------------------------------------------
    // Line classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_classify_basic_record() {
        let rec = classify_line("[2024-01-01 09:00:00] [ERROR] disk full").unwrap();
        assert_eq!(rec.timestamp, "2024-01-01 09:00:00");
        assert_eq!(rec.level, "ERROR");
        assert_eq!(rec.message, "disk full");
    }

    #[test]
    fn test_classify_message_keeps_brackets() {
        let rec = classify_line("[t] [INFO] user [42] logged in [ok]").unwrap();
        assert_eq!(rec.timestamp, "t");
        assert_eq!(rec.message, "user [42] logged in [ok]");
    }

    #[test]
    fn test_classify_empty_message_and_fields() {
        let rec = classify_line("[] [] ").unwrap();
        assert_eq!(rec.timestamp, "");
        assert_eq!(rec.level, "");
        assert_eq!(rec.message, "");
    }

    #[test]
    fn test_classify_rejects_non_records() {
        for line in [
            "",
            "plain text",
            "[2024-01-01 09:00:00] [ERROR]",
            "[2024-01-01 09:00:00] ERROR disk full",
            "[2024-01-01 09:00:00]  [ERROR] two spaces",
            " [2024-01-01 09:00:00] [ERROR] leading space",
            "[2024-01-01 09:00:00][ERROR] no space",
            "[a]b] [INFO] bracket inside timestamp field",
        ] {
            assert!(classify_line(line).is_none(), "should not classify: {line:?}");
        }
    }

    // -------------------------------------------------------------------------
    // Timestamp parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_timestamp_exact_format() {
        let ts = parse_timestamp("2024-02-29 23:59:58").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 2, 29));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (23, 59, 58));
    }

    #[test]
    fn test_parse_timestamp_is_strict() {
        for raw in [
            "bad-time",
            "",
            "2024-1-01 09:00:00",
            "2024-01-01T09:00:00",
            "2024/01/01 09:00:00",
            "2024-01-01 09:00",
            "2024-01-01 09:00:00.123",
            "2024-01-01 09:00:00Z",
            " 2024-01-01 09:00:00",
            "2024-01-01  09:00:00",
            "2024-13-01 09:00:00",
            "2023-02-29 09:00:00",
            "2024-01-01 24:00:00",
        ] {
            assert!(parse_timestamp(raw).is_none(), "should reject {raw:?}");
        }
    }

    // -------------------------------------------------------------------------
    // Entry normalisation
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_line_uppercases_level() {
        let entry = parse_line("[2024-01-01 10:00:00] [warning] low disk").unwrap();
        assert_eq!(entry.level, "WARNING");
        assert_eq!(entry.severity, Severity::Warning);
        assert!(entry.timestamp.is_some());
    }

    #[test]
    fn test_parse_line_unknown_level_still_classifies() {
        let entry = parse_line("[2024-01-01 10:00:00] [Debug] verbose").unwrap();
        assert_eq!(entry.level, "DEBUG");
        assert_eq!(entry.severity, Severity::Unknown);
    }

    #[test]
    fn test_parse_line_bad_timestamp_keeps_fields() {
        let entry = parse_line("[bad-time] [INFO] hello").unwrap();
        assert_eq!(entry.timestamp, None);
        assert_eq!(entry.severity, Severity::Info);
        assert_eq!(entry.message, "hello");
    }

    #[test]
    fn test_parse_line_skips_blank() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t ").is_none());
    }

    #[test]
    fn test_format_error_message() {
        let ts = parse_timestamp("2024-01-01 09:00:00");
        assert_eq!(format_error_message(ts, "disk full"), "[09:00:00] disk full");
        assert_eq!(format_error_message(None, "disk full"), "[--:--:--] disk full");
    }
}
