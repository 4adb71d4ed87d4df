// LogReport - core/report.rs
//
// Text and JSON rendering of a `Summary`.
// Core layer: writes to any Write trait object; the app layer owns the files.

use crate::core::model::{Severity, Summary};
use crate::util::constants;
use crate::util::error::ReportError;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Report metadata supplied by the caller rather than derived from the log.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Date the report was generated.
    pub generated_on: NaiveDate,

    /// Log file the summary was built from, as shown in the text report.
    pub log_file: PathBuf,
}

impl ReportContext {
    fn date(&self) -> String {
        self.generated_on
            .format(constants::REPORT_DATE_FORMAT)
            .to_string()
    }
}

/// Write the fixed-layout text report.
pub fn write_text_report<W: Write>(
    summary: &Summary,
    ctx: &ReportContext,
    mut writer: W,
    report_path: &Path,
) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: report_path.to_path_buf(),
        source,
    };

    render_text(summary, ctx, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

fn render_text<W: Write>(summary: &Summary, ctx: &ReportContext, w: &mut W) -> std::io::Result<()> {
    writeln!(w, "Log Analysis Report")?;
    writeln!(w, "------------------")?;
    writeln!(w, "Analysis Date: {}", ctx.date())?;
    writeln!(w, "Log File: {}", ctx.log_file.display())?;
    writeln!(w)?;
    writeln!(w, "Summary:")?;
    writeln!(w, "- Total Entries: {}", summary.total_entries)?;
    for severity in Severity::recognised() {
        writeln!(w, "- {} Count: {}", severity.label(), summary.counts.get(*severity))?;
    }
    writeln!(w, "- Time Span: {}", summary.elapsed)?;
    writeln!(w)?;
    writeln!(w, "Error Messages:")?;
    for (i, message) in summary.error_messages.iter().enumerate() {
        writeln!(w, "{}. {message}", i + 1)?;
    }
    writeln!(w)?;
    writeln!(w, "Report generated successfully!")
}

/// Shape of the JSON report. Field names and order are the external contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct JsonReport<'a> {
    date: String,
    total_entries: usize,
    errors: usize,
    warnings: usize,
    info: usize,
    time_span: String,
    error_messages: &'a [String],
}

impl<'a> JsonReport<'a> {
    fn new(summary: &'a Summary, ctx: &ReportContext) -> Self {
        Self {
            date: ctx.date(),
            total_entries: summary.total_entries,
            errors: summary.counts.error,
            warnings: summary.counts.warning,
            info: summary.counts.info,
            time_span: summary.elapsed.to_string(),
            error_messages: &summary.error_messages,
        }
    }
}

/// Write the pretty-printed JSON report.
pub fn write_json_report<W: Write>(
    summary: &Summary,
    ctx: &ReportContext,
    mut writer: W,
    report_path: &Path,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, &JsonReport::new(summary, ctx)).map_err(|e| {
        ReportError::Json {
            path: report_path.to_path_buf(),
            source: e,
        }
    })?;
    writer.flush().map_err(|e| ReportError::Io {
        path: report_path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::LogAggregator;

    fn ctx() -> ReportContext {
        ReportContext {
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            log_file: PathBuf::from("/var/log/application.log"),
        }
    }

    fn sample_summary() -> Summary {
        let mut agg = LogAggregator::new();
        for line in [
            "[2024-01-01 09:00:00] [ERROR] disk full",
            "[2024-01-01 10:00:00] [INFO] recovered",
            "[2024-01-01 11:30:00] [WARNING] slow",
            "[2024-01-01 11:31:00] [ERROR] disk full again",
        ] {
            agg.ingest_line(line);
        }
        agg.summary()
    }

    fn text(summary: &Summary) -> String {
        let mut buf = Vec::new();
        write_text_report(summary, &ctx(), &mut buf, Path::new("log_report.txt")).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn json(summary: &Summary) -> serde_json::Value {
        let mut buf = Vec::new();
        write_json_report(summary, &ctx(), &mut buf, Path::new("log_report.json")).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_text_report_layout() {
        let expected = "\
Log Analysis Report
------------------
Analysis Date: 2024-03-05
Log File: /var/log/application.log

Summary:
- Total Entries: 4
- ERROR Count: 2
- WARNING Count: 1
- INFO Count: 1
- Time Span: 2 hours 31 minutes

Error Messages:
1. [09:00:00] disk full
2. [11:31:00] disk full again

Report generated successfully!
";
        assert_eq!(text(&sample_summary()), expected);
    }

    #[test]
    fn test_text_report_empty_summary() {
        let output = text(&Summary::default());
        assert!(output.contains("- Total Entries: 0\n"));
        assert!(output.contains("- Time Span: 0 hours 0 minutes\n"));
        assert!(output.contains("Error Messages:\n\nReport generated successfully!\n"));
    }

    #[test]
    fn test_json_report_fields() {
        let value = json(&sample_summary());
        assert_eq!(value["Date"], "2024-03-05");
        assert_eq!(value["TotalEntries"], 4);
        assert_eq!(value["Errors"], 2);
        assert_eq!(value["Warnings"], 1);
        assert_eq!(value["Info"], 1);
        assert_eq!(value["TimeSpan"], "2 hours 31 minutes");
        assert_eq!(
            value["ErrorMessages"],
            serde_json::json!(["[09:00:00] disk full", "[11:31:00] disk full again"])
        );
    }

    #[test]
    fn test_json_report_is_pretty_and_ordered() {
        let mut buf = Vec::new();
        write_json_report(&Summary::default(), &ctx(), &mut buf, Path::new("r.json")).unwrap();
        let expected = r#"{
  "Date": "2024-03-05",
  "TotalEntries": 0,
  "Errors": 0,
  "Warnings": 0,
  "Info": 0,
  "TimeSpan": "0 hours 0 minutes",
  "ErrorMessages": []
}"#;
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_text_and_json_agree() {
        let summary = sample_summary();
        let output = text(&summary);
        let value = json(&summary);

        let field = |label: &str| -> u64 {
            output
                .lines()
                .find_map(|l| l.strip_prefix(label))
                .and_then(|v| v.trim().parse().ok())
                .unwrap()
        };
        assert_eq!(field("- Total Entries:"), value["TotalEntries"].as_u64().unwrap());
        assert_eq!(field("- ERROR Count:"), value["Errors"].as_u64().unwrap());
        assert_eq!(field("- WARNING Count:"), value["Warnings"].as_u64().unwrap());
        assert_eq!(field("- INFO Count:"), value["Info"].as_u64().unwrap());

        let listed = output
            .lines()
            .skip_while(|l| *l != "Error Messages:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(listed, value["ErrorMessages"].as_array().unwrap().len());
    }
}
