// LogReport - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogReport configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logreport/ or %APPDATA%\LogReport\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    /// Runs before logging is initialised, so it does not log; the caller
    /// reports the resolved paths once tracing is up.
    pub fn resolve() -> Self {
        let config_dir = ProjectDirs::from("", "", constants::APP_ID)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { config_dir }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[input]` section.
    pub input: InputSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[input]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Log file read when no path is given on the command line.
    pub file: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory both reports are written to.
    pub directory: Option<String>,
    /// File name of the text report.
    pub text_report: Option<String>,
    /// File name of the JSON report.
    pub json_report: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default log file, resolved against the working directory.
    pub input_file: PathBuf,
    /// Output directory; `None` means the working directory.
    pub output_dir: Option<PathBuf>,
    pub text_report_name: String,
    pub json_report_name: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(constants::DEFAULT_LOG_FILE_NAME),
            output_dir: None,
            text_report_name: constants::DEFAULT_TEXT_REPORT_NAME.to_string(),
            json_report_name: constants::DEFAULT_JSON_REPORT_NAME.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Called before logging is initialised, so nothing here logs; every
/// problem is returned to the caller instead.
///
/// Returns the validated config and a list of non-fatal problems. A missing
/// file yields defaults with no problems. An unreadable or unparseable file
/// yields defaults plus one problem describing why.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => validate(raw),
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            (AppConfig::default(), vec![err])
        }
    }
}

/// Validate each field of `raw`, accumulating every problem found.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut problems = Vec::new();

    // -- Input: file --
    if let Some(file) = raw.input.file {
        if file.trim().is_empty() {
            problems.push(ConfigError::InvalidValue {
                field: "[input] file",
                value: file,
                expected: "a non-empty path".to_string(),
            });
        } else {
            config.input_file = PathBuf::from(file);
        }
    }

    // -- Output: directory --
    if let Some(dir) = raw.output.directory {
        if !dir.trim().is_empty() {
            config.output_dir = Some(PathBuf::from(dir));
        }
    }

    // -- Output: report names --
    if let Some(name) = raw.output.text_report {
        match check_file_name("[output] text_report", name) {
            Ok(name) => config.text_report_name = name,
            Err(e) => problems.push(e),
        }
    }
    if let Some(name) = raw.output.json_report {
        match check_file_name("[output] json_report", name) {
            Ok(name) => config.json_report_name = name,
            Err(e) => problems.push(e),
        }
    }
    if config.text_report_name == config.json_report_name {
        problems.push(ConfigError::InvalidValue {
            field: "[output] json_report",
            value: config.json_report_name.clone(),
            expected: "a name different from [output] text_report".to_string(),
        });
        config.text_report_name = constants::DEFAULT_TEXT_REPORT_NAME.to_string();
        config.json_report_name = constants::DEFAULT_JSON_REPORT_NAME.to_string();
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::InvalidValue {
                field: "[logging] level",
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, problems)
}

/// Report names are plain file names; the directory comes from
/// `[output] directory`.
fn check_file_name(field: &'static str, name: String) -> Result<String, ConfigError> {
    let trimmed = name.trim();
    let plain = !trimmed.is_empty()
        && Path::new(trimmed).file_name().map(|f| f == trimmed).unwrap_or(false);
    if plain {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value: name,
            expected: "a plain file name without directories".to_string(),
        })
    }
}
