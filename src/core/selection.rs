//! Selection state
//!
//! The chosen `.ui` files, the destination folder and the optional output
//! name override. Mutated only through the methods below; every failing
//! method leaves the state untouched.

use std::path::{Path, PathBuf};

use super::error::ValidationError;
use super::naming::{is_ui_file, is_valid_output_name, output_file_name};

/// UI mode derived from the number of selected files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Empty,
    SingleFile,
    MultiFile,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    files: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    name_override: Option<String>,
}

/// File name of a path as a displayable string
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn name_override(&self) -> Option<&str> {
        self.name_override.as_deref()
    }

    pub fn mode(&self) -> SelectionMode {
        match self.files.len() {
            0 => SelectionMode::Empty,
            1 => SelectionMode::SingleFile,
            _ => SelectionMode::MultiFile,
        }
    }

    /// Replace the selection with `paths`
    ///
    /// Every path must be an existing regular file with the `.ui` extension.
    /// The destination folder becomes the parent of the first file.
    pub fn set_files(&mut self, paths: Vec<PathBuf>) -> Result<(), ValidationError> {
        if paths.is_empty() {
            return Err(ValidationError::NoFilesSelected);
        }

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            if !is_ui_file(&path) {
                return Err(ValidationError::WrongExtension(path));
            }
            if !path.is_file() {
                return Err(ValidationError::NotAFile(path));
            }
            let absolute = std::path::absolute(&path).map_err(|_| ValidationError::NotAFile(path.clone()))?;
            files.push(absolute);
        }

        self.output_dir = files[0].parent().map(Path::to_path_buf);
        self.files = files;
        self.name_override = None;
        log::debug!("Selection replaced: {} file(s)", self.files.len());
        Ok(())
    }

    /// Remove every entry whose file name is in `names`
    ///
    /// Returns the number of removed entries. Dropping to one file restores
    /// the single-file default name; dropping to none resets everything.
    pub fn remove_files(&mut self, names: &[String]) -> usize {
        let before = self.files.len();
        self.files.retain(|f| !names.iter().any(|n| *n == display_name(f)));
        let removed = before - self.files.len();

        if removed > 0 {
            match self.mode() {
                SelectionMode::Empty => *self = Self::default(),
                SelectionMode::SingleFile => self.name_override = None,
                SelectionMode::MultiFile => {}
            }
        }
        removed
    }

    /// Replace the destination folder
    pub fn set_output_directory(&mut self, path: PathBuf) -> Result<(), ValidationError> {
        if !path.is_dir() {
            return Err(ValidationError::NotADirectory(path));
        }
        self.output_dir = Some(std::path::absolute(&path).unwrap_or(path));
        Ok(())
    }

    /// Set the single-file output name; a blank name restores the default
    pub fn set_name_override(&mut self, name: &str) -> Result<(), ValidationError> {
        if self.mode() != SelectionMode::SingleFile {
            return Err(ValidationError::NameNotEditable);
        }
        let trimmed = name.trim();
        if !trimmed.is_empty() && !is_valid_output_name(trimmed) {
            return Err(ValidationError::InvalidOutputName(trimmed.to_string()));
        }
        self.name_override = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        Ok(())
    }

    /// Output file name (with `.py`) for one selected input
    pub fn output_name_for(&self, input: &Path) -> String {
        output_file_name(
            &display_name(input),
            self.mode() == SelectionMode::MultiFile,
            self.name_override(),
        )
    }

    /// Output path for one input, if a destination folder is set
    pub fn output_path_for(&self, input: &Path) -> Option<PathBuf> {
        self.output_dir
            .as_ref()
            .map(|dir| dir.join(self.output_name_for(input)))
    }
}
