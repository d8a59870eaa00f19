//! Command plumbing for ConverterWindow
//!
//! Everything here works without a GPUI context so it can be unit tested.

use crate::controller::{BatchPlan, Command, Dispatched};
use crate::core::{display_name, AppError, SelectionMode};
use crate::ui::components::name_field::FieldKey;

use super::ConverterWindow;

impl ConverterWindow {
    /// Dispatch a command and reflect the result
    ///
    /// Returns the plan for `Command::Convert`; the caller runs it.
    pub(crate) fn apply(&mut self, command: Command) -> Option<BatchPlan> {
        let changes_selection = !matches!(command, Command::Convert | Command::EditOutputName(_));
        match self.controller.dispatch(command) {
            Ok(Dispatched::Status(text)) => {
                self.status = text;
                if changes_selection {
                    self.selected_rows.clear();
                    self.context_menu_row = None;
                    self.errors.clear();
                }
                self.sync_name_field();
                None
            }
            Ok(Dispatched::Convert(plan)) => Some(plan),
            Err(e) => {
                self.report_error(e);
                None
            }
        }
    }

    /// Show `error` in the status line and as a blocking notice
    pub(crate) fn report_error(&mut self, error: AppError) {
        log::warn!("{}", error);
        self.status = error.to_string();
        self.pending_error_message = Some((error.title().to_string(), error.to_string()));
    }

    /// Reset the name field to what the controller will actually use
    pub(crate) fn sync_name_field(&mut self) {
        let selection = self.controller.selection();
        let text = match self.controller.mode() {
            SelectionMode::SingleFile => {
                let name = selection.output_name_for(&selection.files()[0]);
                name.strip_suffix(".py").unwrap_or(&name).to_string()
            }
            SelectionMode::MultiFile => "ui_<name>".to_string(),
            SelectionMode::Empty => String::new(),
        };
        self.name_field.set_text(text);
    }

    /// Start editing the output name (single-file mode only)
    pub(crate) fn begin_name_edit(&mut self) {
        if self.controller.mode() == SelectionMode::SingleFile && !self.is_converting() {
            self.context_menu_row = None;
            self.name_field.begin_edit();
        }
    }

    /// Commit the typed output name to the controller
    pub(crate) fn commit_output_name(&mut self) {
        if !self.name_field.is_editing() {
            return;
        }
        self.name_field.end_edit();
        let name = self.name_field.text().to_string();
        self.apply(Command::EditOutputName(name));
        // A rejected name falls back to the one in use
        self.sync_name_field();
    }

    /// Click on a list row; `additive` toggles instead of replacing
    pub(crate) fn select_row(&mut self, index: usize, additive: bool) {
        self.commit_output_name();
        self.context_menu_row = None;
        if additive {
            if !self.selected_rows.remove(&index) {
                self.selected_rows.insert(index);
            }
        } else {
            self.selected_rows.clear();
            self.selected_rows.insert(index);
        }
    }

    /// Right-click on a list row
    pub(crate) fn open_context_menu(&mut self, index: usize) {
        if !self.selected_rows.contains(&index) {
            self.selected_rows.clear();
            self.selected_rows.insert(index);
        }
        self.context_menu_row = Some(index);
    }

    /// Remove the file at `index` (context menu)
    pub(crate) fn remove_row(&mut self, index: usize) {
        if self.is_converting() {
            return;
        }
        let Some(path) = self.controller.selection().files().get(index) else {
            return;
        };
        let name = display_name(path);
        self.apply(Command::RemoveFiles(vec![name]));
    }

    /// Remove every selected row (Delete key), multi-file mode only
    pub(crate) fn remove_selected_rows(&mut self) {
        if self.is_converting() || self.controller.mode() != SelectionMode::MultiFile {
            return;
        }
        let files = self.controller.selection().files();
        let names: Vec<String> = self
            .selected_rows
            .iter()
            .filter_map(|i| files.get(*i))
            .map(|p| display_name(p))
            .collect();
        if !names.is_empty() {
            self.apply(Command::RemoveFiles(names));
        }
    }

    /// Route a key press; returns true if it was used
    pub(crate) fn handle_key(&mut self, key: &str, key_char: Option<&str>, command_held: bool) -> bool {
        if self.name_field.is_editing() {
            return match self.name_field.handle_key(key, key_char, command_held) {
                FieldKey::Edited => true,
                FieldKey::Commit => {
                    self.commit_output_name();
                    true
                }
                FieldKey::Cancel => {
                    self.sync_name_field();
                    true
                }
                FieldKey::Ignored => false,
            };
        }

        match key {
            "delete" | "backspace" if !self.selected_rows.is_empty() => {
                self.remove_selected_rows();
                true
            }
            "escape" if self.context_menu_row.is_some() => {
                self.context_menu_row = None;
                true
            }
            _ => false,
        }
    }

    /// Text for the final output path label
    pub(crate) fn output_summary(&self) -> String {
        let selection = self.controller.selection();
        let Some(dir) = selection.output_dir() else {
            return String::new();
        };
        match self.controller.mode() {
            SelectionMode::Empty => String::new(),
            SelectionMode::SingleFile => selection
                .output_path_for(&selection.files()[0])
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            SelectionMode::MultiFile => format!(
                "{} files → {}",
                selection.len(),
                dir.join("ui_<name>.py").display()
            ),
        }
    }
}
