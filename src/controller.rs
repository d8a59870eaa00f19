//! Command dispatch
//!
//! Every user action is one `Command`. The window translates toolkit events
//! into commands and renders whatever the controller reports back; it never
//! touches the selection directly.

use std::path::{Path, PathBuf};

use crate::conversion::{check_output_dir, convert_jobs, plan_jobs, BatchReport, Compiler, ConversionJob};
use crate::core::{is_ui_file, AppError, SelectionMode, SelectionState, ValidationError};

/// Convert-time check of the destination folder
type DirCheck = fn(&Path) -> Result<(), ValidationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Files chosen in the file picker
    SelectFiles(Vec<PathBuf>),
    /// Paths dropped onto the window; non-`.ui` paths are skipped
    DropFiles(Vec<PathBuf>),
    /// Folder chosen in the folder picker
    SelectFolder(PathBuf),
    /// Output name typed for the single selected file
    EditOutputName(String),
    /// Remove entries by file name
    RemoveFiles(Vec<String>),
    Convert,
}

/// Result of a successfully dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Show this status text
    Status(String),
    /// Run these jobs, then show the report's status
    Convert(BatchPlan),
}

/// Jobs for one conversion run, one per selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub jobs: Vec<ConversionJob>,
}

impl BatchPlan {
    /// Run the plan on the calling thread
    #[allow(dead_code)]
    pub fn run<C: Compiler + ?Sized>(&self, compiler: &C) -> BatchReport {
        convert_jobs(&self.jobs, compiler, |_, _| {}, |_, _| {})
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    selection: SelectionState,
    dir_check: DirCheck,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            dir_check: check_output_dir,
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with a replacement destination folder check
    #[cfg(test)]
    pub(crate) fn with_dir_check(dir_check: DirCheck) -> Self {
        Self {
            dir_check,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Dispatched, AppError> {
        log::debug!("Dispatching {:?}", command);
        match command {
            Command::SelectFiles(paths) => self.select_files(paths),
            Command::DropFiles(paths) => {
                let ui_paths: Vec<PathBuf> = paths.into_iter().filter(|p| is_ui_file(p)).collect();
                if ui_paths.is_empty() {
                    return Err(ValidationError::NoUiFilesDropped.into());
                }
                self.select_files(ui_paths)
            }
            Command::SelectFolder(path) => {
                self.selection.set_output_directory(path)?;
                Ok(Dispatched::Status("Selected folder".to_string()))
            }
            Command::EditOutputName(name) => {
                self.selection.set_name_override(&name)?;
                let file = &self.selection.files()[0];
                Ok(Dispatched::Status(format!(
                    "Output file: {}",
                    self.selection.output_name_for(file)
                )))
            }
            Command::RemoveFiles(names) => {
                let removed = self.selection.remove_files(&names);
                let status = if self.selection.is_empty() {
                    "No file selected".to_string()
                } else {
                    format!("Removed {} file(s)", removed)
                };
                Ok(Dispatched::Status(status))
            }
            Command::Convert => self.plan_conversion().map(Dispatched::Convert),
        }
    }

    fn select_files(&mut self, paths: Vec<PathBuf>) -> Result<Dispatched, AppError> {
        self.selection.set_files(paths)?;
        let status = match self.selection.len() {
            1 => "Selected file".to_string(),
            n => format!("Selected {} files", n),
        };
        log::info!("{}", status);
        Ok(Dispatched::Status(status))
    }

    /// Validate the selection and build one job per file
    fn plan_conversion(&self) -> Result<BatchPlan, AppError> {
        if self.selection.is_empty() {
            return Err(ValidationError::NoFilesSelected.into());
        }
        let output_dir = self
            .selection
            .output_dir()
            .ok_or(ValidationError::NoOutputDirectory)?;
        (self.dir_check)(output_dir)?;

        let jobs = plan_jobs(self.selection.files(), output_dir, |input| {
            self.selection.output_name_for(input)
        });
        Ok(BatchPlan { jobs })
    }
}
