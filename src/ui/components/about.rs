//! About window component

use gpui::{
    Bounds, Context, Render, SharedString, Window, WindowBounds, WindowHandle, WindowOptions, div,
    prelude::*, px, size,
};

use crate::core::AppSettings;
use crate::ui::Theme;

/// The About window content
pub struct AboutBox {
    /// Compiler the conversions will run
    uic_command: String,
}

impl AboutBox {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let uic_command = cx
            .try_global::<AppSettings>()
            .map(|s| s.uic_command.clone())
            .unwrap_or_default();
        Self { uic_command }
    }

    /// Open the About window
    pub fn open(cx: &mut gpui::App) -> Option<WindowHandle<Self>> {
        let bounds = Bounds::centered(None, size(px(380.), px(220.)), cx);

        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(380.), px(220.))),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("About UI2Py Converter".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(AboutBox::new),
        );
        match result {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Failed to open About window: {}", e);
                None
            }
        }
    }
}

impl Render for AboutBox {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let version = env!("CARGO_PKG_VERSION");
        let theme = Theme::from_appearance(window.appearance());

        div()
            .flex()
            .flex_col()
            .justify_center()
            .size_full()
            .bg(theme.bg)
            .p_6()
            .gap_1()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("UI2Py Converter"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child(SharedString::from(format!("Version {}", version))),
            )
            .child(div().h(px(8.)))
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child("Compile Qt Designer .ui files into Python modules"),
            )
            .child(div().h(px(8.)))
            .child(
                div()
                    .text_xs()
                    .text_color(theme.text_muted)
                    .child(SharedString::from(format!("Compiler: {}", self.uic_command))),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(theme.text_muted)
                    .child("Built with Rust and GPUI"),
            )
    }
}
