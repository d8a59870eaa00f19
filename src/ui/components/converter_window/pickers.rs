//! File and folder pickers, drops and the output folder shortcut

use std::path::PathBuf;

use gpui::{AsyncApp, Context, PathPromptOptions, WeakEntity};

use crate::controller::Command;

use super::ConverterWindow;

/// Unpack a path prompt result
///
/// A cancelled prompt gives no paths; a platform error is logged and returned.
pub(crate) fn picked_paths<E, C>(result: Result<Result<Option<Vec<PathBuf>>, E>, C>) -> Result<Vec<PathBuf>, String>
where
    E: std::fmt::Display,
{
    match result {
        Ok(Ok(Some(paths))) => Ok(paths),
        Ok(Ok(None)) => Ok(Vec::new()),
        Ok(Err(e)) => {
            log::warn!("Path prompt failed: {}", e);
            Err(e.to_string())
        }
        Err(_) => {
            log::debug!("Path prompt was dropped before answering");
            Ok(Vec::new())
        }
    }
}

impl ConverterWindow {
    /// Show the file picker (several `.ui` files may be chosen)
    pub fn select_files(&mut self, cx: &mut Context<Self>) {
        if self.is_converting() {
            return;
        }
        self.commit_output_name();
        let options = PathPromptOptions {
            files: true,
            directories: false,
            multiple: true,
            prompt: None,
        };
        let receiver = cx.prompt_for_paths(options);
        cx.spawn(|this_handle: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                let picked = picked_paths(receiver.await);
                let _ = this_handle.update(&mut async_cx, |this, cx| {
                    match picked {
                        Ok(paths) => this.files_picked(paths),
                        Err(message) => this.picker_failed(&message),
                    }
                    cx.notify();
                });
            }
        })
        .detach();
    }

    /// Show the folder picker for the destination folder
    pub fn select_folder(&mut self, cx: &mut Context<Self>) {
        if self.is_converting() {
            return;
        }
        self.commit_output_name();
        let options = PathPromptOptions {
            files: false,
            directories: true,
            multiple: false,
            prompt: None,
        };
        let receiver = cx.prompt_for_paths(options);
        cx.spawn(|this_handle: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                let picked = picked_paths(receiver.await);
                let _ = this_handle.update(&mut async_cx, |this, cx| {
                    match picked {
                        Ok(paths) => this.folder_picked(paths.into_iter().next()),
                        Err(message) => this.picker_failed(&message),
                    }
                    cx.notify();
                });
            }
        })
        .detach();
    }

    /// Result of the file picker (empty when cancelled)
    pub(crate) fn files_picked(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            self.status = "No file selected".to_string();
            return;
        }
        self.apply(Command::SelectFiles(paths));
    }

    /// The platform picker could not be shown
    pub(crate) fn picker_failed(&mut self, message: &str) {
        self.status = format!("Could not open the file dialog: {}", message);
    }

    /// Result of the folder picker (None when cancelled)
    pub(crate) fn folder_picked(&mut self, folder: Option<PathBuf>) {
        match folder {
            Some(path) => {
                self.apply(Command::SelectFolder(path));
            }
            None => self.status = "No folder selected".to_string(),
        }
    }

    /// External paths dropped on the window
    pub(crate) fn files_dropped(&mut self, paths: &[PathBuf]) {
        if self.is_converting() {
            return;
        }
        self.commit_output_name();
        self.apply(Command::DropFiles(paths.to_vec()));
    }

    /// Open the destination folder in the system file manager
    pub fn open_output_dir(&mut self) {
        let Some(dir) = self.controller.selection().output_dir() else {
            self.status = "No destination folder selected".to_string();
            return;
        };
        if let Err(e) = crate::actions::open_in_file_manager(dir) {
            log::error!("Failed to open {}: {}", dir.display(), e);
            self.status = format!("Could not open folder: {}", e);
        }
    }
}
