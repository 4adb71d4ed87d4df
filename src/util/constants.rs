// LogReport - util/constants.rs
//
// Single source of truth for all named constants, file names, and formats.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogReport";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogReport";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input
// =============================================================================

/// Log file read from the working directory when no path is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "application.log";

/// Full-line grammar for a record: `[<timestamp>] [<level>] <message>`.
///
/// Both bracket fields stop at the first `]`; the message is the remainder of
/// the line and may be empty or contain further brackets.
pub const LINE_PATTERN: &str = r"^\[([^\]]*)\] \[([^\]]*)\] (.*)$";

/// Shape check applied before handing timestamp text to chrono, so that
/// single-digit fields or stray whitespace are rejected.
pub const TIMESTAMP_SHAPE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

/// chrono format of the timestamp field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// chrono format of the time of day shown in front of error messages.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Stand-in for the time of day of an error line whose timestamp did not parse.
pub const MISSING_TIME_PLACEHOLDER: &str = "--:--:--";

// =============================================================================
// Output
// =============================================================================

/// Default file name of the human-readable report.
pub const DEFAULT_TEXT_REPORT_NAME: &str = "log_report.txt";

/// Default file name of the machine-readable report.
pub const DEFAULT_JSON_REPORT_NAME: &str = "log_report.json";

/// chrono format of the generation date written into both reports.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so stderr stays quiet during normal runs.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted by `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
