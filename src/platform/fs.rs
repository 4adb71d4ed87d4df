// LogReport - platform/fs.rs
//
// Filesystem access for the input log and the report files.
// Every failure is mapped to a typed error carrying the path involved.

use crate::util::error::{InputError, ReportError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Open the log file for buffered reading.
///
/// Distinguishes a missing file and a directory from other I/O failures so
/// the caller can report them separately.
pub fn open_log_file(path: &Path) -> Result<BufReader<File>, InputError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            return Err(InputError::NotAFile {
                path: path.to_path_buf(),
            })
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InputError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(InputError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    let file = File::open(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) a report file for buffered writing, creating its
/// parent directory first when needed.
pub fn create_report_file(path: &Path) -> Result<BufWriter<File>, ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            tracing::debug!(dir = %parent.display(), "Creating report directory");
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    File::create(path).map(BufWriter::new).map_err(io_err)
}
