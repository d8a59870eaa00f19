//! UI2Py Converter - GPUI Application
//!
//! A small desktop tool that compiles Qt Designer `.ui` files into Python
//! modules with `pyside6-uic`.

mod actions;
mod controller;
mod conversion;
mod core;
mod logging;
mod ui;

#[cfg(test)]
mod test_fixtures;

use gpui::{
    prelude::*, px, size, App, Application, Bounds, KeyBinding, Menu, MenuItem, WindowBounds,
    WindowOptions,
};
use actions::{
    About, Convert, OpenLogDir, OpenOutputDir, Quit, RemoveSelected, SelectFiles, SelectFolder,
};
use core::AppSettings;
use ui::components::{AboutBox, ConverterWindow};

/// Build the application menus
fn build_menus() -> Vec<Menu> {
    vec![
        Menu {
            name: "UI2Py Converter".into(),
            items: vec![
                MenuItem::action("About UI2Py Converter", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: vec![
                MenuItem::action("Select File(s)...", SelectFiles),
                MenuItem::action("Select Destination Folder...", SelectFolder),
                MenuItem::action("Remove Selected Files", RemoveSelected),
                MenuItem::separator(),
                MenuItem::action("Convert", Convert),
                MenuItem::separator(),
                MenuItem::action("Open Destination Folder", OpenOutputDir),
                MenuItem::action("Open Log Folder", OpenLogDir),
            ],
        },
    ]
}

fn main() {
    logging::init_logging();

    Application::new().run(|cx: &mut App| {
        let settings = AppSettings::load();
        log::info!("Using compiler: {}", settings.uic_command);
        cx.set_global(settings);

        // Register action handlers
        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &About, cx| {
            AboutBox::open(cx);
        });
        cx.on_action(|_: &OpenLogDir, _cx| {
            if let Err(e) = logging::open_log_directory() {
                log::warn!("{}", e);
            }
        });

        // Window-level actions (select, convert, open destination) are handled
        // by ConverterWindow, which holds focus.

        // Bind keyboard shortcuts
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-o", SelectFiles, None),
            KeyBinding::new("cmd-shift-o", SelectFolder, None),
            KeyBinding::new("cmd-enter", Convert, None),
        ]);

        cx.set_menus(build_menus());

        // Open the main window
        let bounds = Bounds::centered(None, size(px(560.), px(520.)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(480.), px(400.))),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("UI2Py Converter".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(ConverterWindow::new),
        );
        if let Err(e) = opened {
            log::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        // Quit once the last window is closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.activate(true);
    });
}
