// LogReport - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary between the parser, the aggregator
// and the report renderers.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// Severity levels recognised in a record's level field.
///
/// The mapping from level text is total: anything that is not one of the
/// three recognised labels maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Error,
    Warning,
    Info,
    #[default]
    Unknown,
}

impl Severity {
    /// Recognised variants in report order.
    pub fn recognised() -> &'static [Severity] {
        &[Severity::Error, Severity::Warning, Severity::Info]
    }

    /// Map already-uppercased level text to a severity.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ERROR" => Severity::Error,
            "WARNING" => Severity::Warning,
            "INFO" => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    /// Upper-case label as it appears in log files and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Log Entry (transient output of classification)
// =============================================================================

/// A single classified record. Exists only while its line is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Parsed wall-clock timestamp. `None` when the timestamp field did not
    /// match `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: Option<NaiveDateTime>,

    /// Severity derived from the upper-cased level field.
    pub severity: Severity,

    /// Upper-cased level text exactly as captured, kept for diagnostics when
    /// the severity is `Unknown`.
    pub level: String,

    /// Remainder of the line after the level field.
    pub message: String,
}

// =============================================================================
// Severity counts
// =============================================================================

/// Per-severity counters with a fixed slot for each recognised level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    /// Count for `severity`; always zero for `Unknown`.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Unknown => 0,
        }
    }

    /// Increment the counter for `severity`.
    ///
    /// Returns `false` (and changes nothing) for `Unknown`.
    pub fn increment(&mut self, severity: Severity) -> bool {
        let slot = match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
            Severity::Unknown => return false,
        };
        *slot += 1;
        true
    }

    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }
}

// =============================================================================
// Elapsed span
// =============================================================================

/// Distance between the first and last parsed timestamps of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedSpan(Duration);

impl ElapsedSpan {
    pub fn zero() -> Self {
        Self(Duration::zero())
    }

    pub fn between(first: NaiveDateTime, last: NaiveDateTime) -> Self {
        Self(last - first)
    }

    /// Whole hours, with days folded in.
    pub fn hours(&self) -> i64 {
        self.0.num_hours()
    }

    /// Whole minutes left over after `hours()`. Carries the span's sign.
    pub fn minutes(&self) -> i64 {
        self.0.num_minutes() % 60
    }
}

impl Default for ElapsedSpan {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for ElapsedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours {} minutes", self.hours(), self.minutes())
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Immutable result of one aggregation run. The only value renderers see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records with a recognised severity.
    pub total_entries: usize,

    pub counts: SeverityCounts,

    /// Last parsed timestamp minus first; zero when no timestamp parsed.
    pub elapsed: ElapsedSpan,

    /// `"[HH:MM:SS] <message>"` for every ERROR record, in input order.
    pub error_messages: Vec<String>,
}
