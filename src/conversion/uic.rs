//! uic subprocess handling

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{find_on_path, is_writable, Compiler, ConversionOutcome};
use crate::core::{AppError, AppSettings};

/// The external `.ui` compiler (`pyside6-uic` by default)
#[derive(Debug, Clone)]
pub struct UicCompiler {
    program: PathBuf,
    message_limit: usize,
}

impl UicCompiler {
    pub fn new(program: impl Into<PathBuf>, message_limit: usize) -> Self {
        Self {
            program: program.into(),
            message_limit,
        }
    }

    /// Find the configured compiler on the search path
    pub fn locate(settings: &AppSettings) -> Result<Self, AppError> {
        let program = find_on_path(&settings.uic_command)?;
        log::info!("Using compiler at {}", program.display());
        Ok(Self::new(program, settings.message_limit))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `<tool> <input> -o <output>`
    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(input).arg("-o").arg(output);

        // Hide console window on Windows
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
        }

        cmd
    }
}

impl Compiler for UicCompiler {
    fn compile(&self, input: &Path, output: &Path) -> ConversionOutcome {
        if output_is_read_only(output) {
            log::warn!("Output file is read-only: {}", output.display());
            return ConversionOutcome::Failure(format!("Permission denied: {}", output.display()));
        }
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !is_writable(parent) {
                log::warn!("Output folder is not writable: {}", parent.display());
                return ConversionOutcome::Failure(format!("Permission denied: {}", output.display()));
            }
        }

        log::info!("Converting: {} -> {}", input.display(), output.display());

        match self.command(input, output).output() {
            Ok(result) if result.status.success() => {
                log::info!("Successfully converted: {}", input.display());
                ConversionOutcome::Success
            }
            Ok(result) => {
                let stderr = String::from_utf8_lossy(&result.stderr);
                let stdout = String::from_utf8_lossy(&result.stdout);
                let message = failure_message(&stderr, &stdout, result.status.code(), self.message_limit);
                log::warn!("Conversion failed for {}: {}", input.display(), message);
                ConversionOutcome::Failure(message)
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                log::error!("Permission denied running {}: {}", self.program.display(), e);
                ConversionOutcome::Failure(format!("Permission denied: {}", self.program.display()))
            }
            Err(e) => {
                log::error!("Failed to spawn {}: {}", self.program.display(), e);
                ConversionOutcome::Failure(truncate_message(
                    &format!("Failed to start {}: {}", self.program.display(), e),
                    self.message_limit,
                ))
            }
        }
    }
}

fn output_is_read_only(output: &Path) -> bool {
    std::fs::metadata(output)
        .map(|m| m.is_file() && m.permissions().readonly())
        .unwrap_or(false)
}

/// Pick the message shown for a failed run
///
/// stderr first, then stdout, then the exit code.
pub fn failure_message(stderr: &str, stdout: &str, code: Option<i32>, limit: usize) -> String {
    let stderr = stderr.trim();
    let stdout = stdout.trim();
    let message = if !stderr.is_empty() {
        stderr.to_string()
    } else if !stdout.is_empty() {
        stdout.to_string()
    } else {
        match code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    };
    truncate_message(&message, limit)
}

/// Cut `message` to `limit` characters, marking the cut with `...`
pub fn truncate_message(message: &str, limit: usize) -> String {
    if message.chars().count() <= limit {
        return message.to_string();
    }
    let mut cut: String = message.chars().take(limit).collect();
    cut.push_str("...");
    cut
}
