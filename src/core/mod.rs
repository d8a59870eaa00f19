//! Core application state
//!
//! This module contains:
//! - Selection state (chosen files, destination folder, name override)
//! - Output file naming
//! - Error types
//! - Application settings

mod error;
pub mod naming;
mod selection;
mod settings;

pub use error::{AppError, ValidationError};
pub use naming::is_ui_file;
pub use selection::{display_name, SelectionMode, SelectionState};
pub use settings::AppSettings;
