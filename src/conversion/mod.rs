//! UI conversion module
//!
//! Runs the external `.ui` compiler, one process per input file.

mod batch;
mod uic;
mod worker;

pub use batch::{convert_jobs, plan_jobs, BatchReport, ConversionJob, FileResult};
pub use uic::UicCompiler;
pub use worker::{BatchWorker, WorkerStatus};

use std::path::{Path, PathBuf};

use crate::core::{AppError, ValidationError};

/// Result of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Success,
    Failure(String),
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success)
    }
}

/// Something that turns one `.ui` file into one `.py` file
pub trait Compiler {
    fn compile(&self, input: &Path, output: &Path) -> ConversionOutcome;
}

/// Locate `tool` on the PATH
///
/// Names containing a path separator are checked directly instead.
pub fn find_on_path(tool: &str) -> Result<PathBuf, AppError> {
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    find_in_dirs(tool, std::env::split_paths(&search_path))
}

/// Locate `tool` in the given directories
pub fn find_in_dirs<I>(tool: &str, dirs: I) -> Result<PathBuf, AppError>
where
    I: IntoIterator<Item = PathBuf>,
{
    let not_found = || AppError::ToolNotFound {
        tool: tool.to_string(),
    };

    let direct = Path::new(tool);
    if direct.components().count() > 1 || direct.is_absolute() {
        return if is_executable(direct) {
            Ok(direct.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    for dir in dirs {
        for candidate in executable_names(tool) {
            let path = dir.join(&candidate);
            if is_executable(&path) {
                log::debug!("Found {} at {}", tool, path.display());
                return Ok(path);
            }
        }
    }

    Err(not_found())
}

/// File names to try for `tool` (adds PATHEXT suffixes on Windows)
fn executable_names(tool: &str) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
        names.extend(
            pathext
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| format!("{}{}", tool, ext.to_ascii_lowercase())),
        );
    }
    names
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Check that the destination folder still exists and is writable
pub fn check_output_dir(dir: &Path) -> Result<(), ValidationError> {
    check_output_dir_with(dir, is_writable)
}

/// `check_output_dir` with a caller-supplied writability test
pub(crate) fn check_output_dir_with<W>(dir: &Path, writable: W) -> Result<(), ValidationError>
where
    W: Fn(&Path) -> bool,
{
    if !dir.is_dir() {
        return Err(ValidationError::NotADirectory(dir.to_path_buf()));
    }
    if !writable(dir) {
        return Err(ValidationError::DirectoryNotWritable(dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
pub(crate) fn is_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
pub(crate) fn is_writable(dir: &Path) -> bool {
    std::fs::metadata(dir)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
