//! ConverterWindow component - The main application view
//!
//! The root view of the application, containing:
//! - File/folder picker buttons
//! - Selection summary and output name field
//! - File list with drag-and-drop and removal
//! - Status bar

mod commands;
mod convert;
mod pickers;
mod render;
#[cfg(test)]
mod tests;

use gpui::{Context, FocusHandle, ScrollHandle};
use std::collections::BTreeSet;

use crate::controller::Controller;
use crate::conversion::BatchWorker;
use crate::ui::components::name_field::NameField;

/// The main converter view
///
/// Handles:
/// - Translating clicks, drops and key presses into controller commands
/// - Running conversions on the batch worker
/// - Rendering the current selection and status
pub struct ConverterWindow {
    /// Selection state and command dispatch
    pub(crate) controller: Controller,
    /// Output name entry (single-file mode)
    pub(crate) name_field: NameField,
    /// Selected list rows (for removal)
    pub(crate) selected_rows: BTreeSet<usize>,
    /// Row whose context menu is open
    pub(crate) context_menu_row: Option<usize>,
    /// Status line text
    pub(crate) status: String,
    /// Per-file errors from the last conversion
    pub(crate) errors: Vec<String>,
    /// Blocking notice to show on next render (title, message)
    pub(crate) pending_error_message: Option<(String, String)>,
    /// Running batch, if any
    pub(crate) worker: Option<BatchWorker>,
    /// Whether we've subscribed to appearance changes
    pub(crate) appearance_subscription_set: bool,
    /// Whether we need to grab initial focus (for menu items and keys to work)
    pub(crate) needs_initial_focus: bool,
    /// Handle for scroll state
    pub(crate) scroll_handle: ScrollHandle,
    /// Focus handle for receiving actions (None in tests)
    pub(crate) focus_handle: Option<FocusHandle>,
}

const INITIAL_STATUS: &str = "Select a .ui file or drop files here";

impl ConverterWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: Some(cx.focus_handle()),
            needs_initial_focus: true,
            ..Self::new_detached()
        }
    }

    /// Window state without a GPUI context (no focus handle)
    pub(crate) fn new_detached() -> Self {
        Self {
            controller: Controller::new(),
            name_field: NameField::new(),
            selected_rows: BTreeSet::new(),
            context_menu_row: None,
            status: INITIAL_STATUS.to_string(),
            errors: Vec::new(),
            pending_error_message: None,
            worker: None,
            appearance_subscription_set: false,
            needs_initial_focus: false,
            scroll_handle: ScrollHandle::new(),
            focus_handle: None,
        }
    }

    pub fn is_converting(&self) -> bool {
        self.worker.is_some()
    }
}
