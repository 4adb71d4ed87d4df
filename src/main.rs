// LogReport - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Running the analysis and printing status lines

use clap::Parser;
use logreport::app::analysis::{self, AnalysisRequest};
use logreport::platform::config::{self, PlatformPaths};
use logreport::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogReport - summarise a bracketed severity log into text and JSON reports.
///
/// Reads lines of the form `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`, counts
/// ERROR, WARNING and INFO records, and lists every error message.
#[derive(Parser, Debug)]
#[command(name = "logreport", version, about)]
struct Cli {
    /// Log file to analyse (defaults to application.log in the working directory).
    path: Option<PathBuf>,

    /// Directory the reports are written to.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_path = platform_paths.config_file();
    let (app_config, config_problems) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogReport starting"
    );
    tracing::debug!(
        path = %config_path.display(),
        found = config_path.exists(),
        "Configuration resolved"
    );
    for problem in &config_problems {
        tracing::warn!(error = %problem, "Config problem; using defaults for affected values");
    }

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            println!("Error: cannot determine the working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = AnalysisRequest::resolve(
        &app_config,
        cli.path.as_deref(),
        cli.output_dir.as_deref(),
        &working_dir,
    );

    println!("Looking for log file at: {}", request.log_file.display());

    let today = chrono::Local::now().date_naive();
    match analysis::run(&request, today) {
        Ok(_) => {
            println!(
                "Log analysis completed. Report saved to {}",
                request.text_report.display()
            );
            println!("JSON report saved to {}", request.json_report.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
