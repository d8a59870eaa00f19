//! Reusable UI components

mod about;
mod converter_window;
pub mod file_row;
pub mod name_field;
pub mod status_bar;

pub use about::AboutBox;
pub use converter_window::ConverterWindow;
