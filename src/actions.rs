//! Application-wide actions
//!
//! Actions that can be triggered from menus or keyboard shortcuts.

use gpui::actions;
use std::io;
use std::path::Path;
use std::process::Command;

// Define actions for menu items
actions!(
    app,
    [
        Quit,
        About,
        SelectFiles,
        SelectFolder,
        Convert,
        RemoveSelected,
        OpenOutputDir,
        OpenLogDir,
    ]
);

/// Program used to reveal a folder on this platform
fn file_manager() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Open `path` in the system file manager
pub fn open_in_file_manager(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        ));
    }
    Command::new(file_manager()).arg(path).spawn()?;
    Ok(())
}
