//! Error types shared by the controller, selection state and invoker

use std::path::PathBuf;
use thiserror::Error;

/// A user action was rejected before anything changed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a valid .ui file first")]
    NoFilesSelected,
    #[error("Not a .ui file: {}", .0.display())]
    WrongExtension(PathBuf),
    #[error("File does not exist: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("None of the dropped files are .ui files")]
    NoUiFilesDropped,
    #[error("Not a folder: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Please select a valid destination folder")]
    NoOutputDirectory,
    #[error("Destination folder is not writable: {}", .0.display())]
    DirectoryNotWritable(PathBuf),
    #[error("The output name can only be changed when a single file is selected")]
    NameNotEditable,
    #[error("Invalid output name: '{0}'")]
    InvalidOutputName(String),
}

/// Errors that abort a whole operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The compiler executable is not on the search path
    #[error("'{tool}' was not found on the search path. Is PySide6 installed?")]
    ToolNotFound { tool: String },
    #[error("Conversion worker stopped unexpectedly")]
    Worker,
}

impl AppError {
    /// Title for the blocking notice shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::DirectoryNotWritable(_)) => "Permission Denied",
            AppError::Validation(_) => "Invalid Selection",
            AppError::ToolNotFound { .. } => "Compiler Not Found",
            AppError::Worker => "Conversion Error",
        }
    }
}
