// LogReport - app/analysis.rs
//
// Run lifecycle: resolve paths, scan the log file, write both reports.
//
// Ordering guarantees:
//   - The input file is checked before anything is written, so a missing
//     log never produces report files.
//   - The log reader is dropped as soon as the scan ends, on success and on
//     failure alike.
//   - The text report is fully written and flushed before the JSON report is
//     started.

use crate::core::aggregate::{LogAggregator, ScanStats};
use crate::core::model::Summary;
use crate::core::report::{self, ReportContext};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::{InputError, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything a run needs, resolved from CLI arguments and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub log_file: PathBuf,
    pub text_report: PathBuf,
    pub json_report: PathBuf,
}

impl AnalysisRequest {
    /// Combine CLI overrides with the validated config.
    ///
    /// Relative input paths are anchored at `working_dir` so the text report
    /// shows where the log was actually read from.
    pub fn resolve(
        config: &AppConfig,
        cli_path: Option<&Path>,
        cli_output_dir: Option<&Path>,
        working_dir: &Path,
    ) -> Self {
        let log_file = cli_path.unwrap_or(config.input_file.as_path());
        let log_file = if log_file.is_absolute() {
            log_file.to_path_buf()
        } else {
            working_dir.join(log_file)
        };

        let output_dir = cli_output_dir
            .or(config.output_dir.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self {
            log_file,
            text_report: output_dir.join(&config.text_report_name),
            json_report: output_dir.join(&config.json_report_name),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub summary: Summary,
    pub stats: ScanStats,
}

/// Scan `path` and return the aggregated summary with its scan statistics.
pub fn analyze_file(path: &Path) -> Result<AnalysisOutcome> {
    let started = Instant::now();
    tracing::info!(path = %path.display(), "Reading log file");

    let reader = fs::open_log_file(path)?;
    let mut aggregator = LogAggregator::new();
    aggregator
        .ingest_reader(reader)
        .map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let stats = aggregator.state().stats;
    let summary = aggregator.summary();

    tracing::info!(
        path = %path.display(),
        lines = stats.lines_read,
        entries = summary.total_entries,
        errors = summary.error_messages.len(),
        malformed = stats.malformed_lines,
        unrecognized_levels = stats.unrecognized_levels,
        unparseable_timestamps = stats.unparseable_timestamps,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Log file scanned"
    );

    Ok(AnalysisOutcome { summary, stats })
}

/// Write the text report to `path`.
pub fn write_text_report(summary: &Summary, ctx: &ReportContext, path: &Path) -> Result<()> {
    let writer = fs::create_report_file(path)?;
    report::write_text_report(summary, ctx, writer, path)?;
    tracing::info!(path = %path.display(), "Text report written");
    Ok(())
}

/// Write the JSON report to `path`.
pub fn write_json_report(summary: &Summary, ctx: &ReportContext, path: &Path) -> Result<()> {
    let writer = fs::create_report_file(path)?;
    report::write_json_report(summary, ctx, writer, path)?;
    tracing::info!(path = %path.display(), "JSON report written");
    Ok(())
}

/// Full pipeline: scan the log, then write the text and JSON reports.
pub fn run(request: &AnalysisRequest, generated_on: NaiveDate) -> Result<AnalysisOutcome> {
    let outcome = analyze_file(&request.log_file)?;

    let ctx = ReportContext {
        generated_on,
        log_file: request.log_file.clone(),
    };
    write_text_report(&outcome.summary, &ctx, &request.text_report)?;
    write_json_report(&outcome.summary, &ctx, &request.json_report)?;

    Ok(outcome)
}
