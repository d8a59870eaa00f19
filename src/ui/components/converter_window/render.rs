//! Rendering implementation for ConverterWindow
//!
//! Contains the Render trait implementation and the section helpers.

use gpui::{
    Context, ExternalPaths, IntoElement, KeyDownEvent, PromptLevel, Render, SharedString, Window,
    div, prelude::*,
};

use crate::actions::{Convert, OpenOutputDir, RemoveSelected, SelectFiles, SelectFolder};
use crate::core::{SelectionMode, display_name};
use crate::ui::Theme;
use crate::ui::components::file_row::{FileRowProps, render_file_row};
use crate::ui::components::name_field::{NameFieldProps, render_name_field};
use crate::ui::components::status_bar::{StatusBarProps, render_status_bar};

use super::ConverterWindow;

/// A plain labelled button
fn button(id: &'static str, label: &'static str, enabled: bool, theme: &Theme) -> gpui::Stateful<gpui::Div> {
    div()
        .id(SharedString::from(id))
        .px_4()
        .py_2()
        .text_sm()
        .rounded_md()
        .text_color(gpui::white())
        .bg(if enabled { theme.accent } else { theme.disabled })
        .when(enabled, |el| {
            let hover = theme.accent_hover;
            el.cursor_pointer().hover(move |s| s.bg(hover))
        })
        .child(label)
}

/// "Label: value" row
fn info_row(label: &'static str, value: impl IntoElement, theme: &Theme) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .w_24()
                .text_sm()
                .text_color(theme.text_muted)
                .child(label),
        )
        .child(value)
}

impl ConverterWindow {
    /// Render the picker buttons
    fn render_toolbar(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let enabled = !self.is_converting();
        div()
            .px_6()
            .pt_4()
            .flex()
            .gap_2()
            .child(
                button("select-files-button", "Select File(s)", enabled, theme).on_click(cx.listener(
                    |this, _event, _window, cx| this.select_files(cx),
                )),
            )
            .child(
                button("select-folder-button", "Select Folder", enabled, theme).on_click(cx.listener(
                    |this, _event, _window, cx| this.select_folder(cx),
                )),
            )
    }

    /// Render the selection summary (file, destination, output name, final path)
    fn render_summary(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let selection = self.controller.selection();
        let mode = self.controller.mode();

        let file_label = match mode {
            SelectionMode::Empty => "No file selected".to_string(),
            SelectionMode::SingleFile => display_name(&selection.files()[0]),
            SelectionMode::MultiFile => format!("{} files", selection.len()),
        };
        let destination = selection
            .output_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "No folder selected".to_string());

        let name_field = render_name_field(
            NameFieldProps {
                text: self.name_field.text().to_string(),
                editable: mode == SelectionMode::SingleFile && !self.is_converting(),
                editing: self.name_field.is_editing(),
                theme: *theme,
            },
            cx,
            |view: &mut Self| view.begin_name_edit(),
        );

        let value = |text: String| {
            div()
                .flex_1()
                .text_sm()
                .text_color(theme.text)
                .overflow_hidden()
                .text_ellipsis()
                .child(text)
        };

        div()
            .px_6()
            .py_3()
            .flex()
            .flex_col()
            .gap_2()
            .child(info_row("File:", value(file_label), theme))
            .child(info_row("Destination:", value(destination), theme))
            .child(info_row(
                "Output name:",
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(name_field)
                    .child(div().text_sm().text_color(theme.text_muted).child(".py")),
                theme,
            ))
            .child(info_row("Final path:", value(self.output_summary()), theme))
    }

    /// Render the empty state drop zone
    fn render_empty_state(&self, theme: &Theme) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .text_color(theme.text_muted)
            .child(div().text_2xl().child("📄"))
            .child(div().text_lg().child("Drop .ui files here"))
            .child(div().text_sm().child("or use Select File(s)"))
    }

    /// Render the selected files
    fn render_file_rows(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement {
        let selection = self.controller.selection();
        let mut list = div().w_full().flex().flex_col().gap_1();

        for (index, path) in selection.files().iter().enumerate() {
            let props = FileRowProps {
                index,
                file_name: display_name(path),
                output_name: selection.output_name_for(path),
                is_selected: self.selected_rows.contains(&index),
                show_context_menu: self.context_menu_row == Some(index),
                theme: *theme,
            };

            let row = render_file_row(
                props,
                cx,
                |view: &mut Self, idx, additive| view.select_row(idx, additive),
                |view: &mut Self, idx| view.open_context_menu(idx),
                |view: &mut Self, idx| view.remove_row(idx),
            );
            list = list.child(row);
        }

        list
    }

    /// Show any pending blocking notice
    fn show_pending_error_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((title, message)) = self.pending_error_message.take() {
            let _future = window.prompt(PromptLevel::Warning, &title, Some(&message), &["OK"], cx);
        }
    }
}

impl Render for ConverterWindow {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Subscribe to appearance changes (once)
        if !self.appearance_subscription_set {
            self.appearance_subscription_set = true;
            cx.observe_window_appearance(window, |_this, _window, cx| {
                cx.notify();
            })
            .detach();
        }

        // Grab initial focus so menu items and keys work immediately
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            if let Some(ref focus_handle) = self.focus_handle {
                focus_handle.focus(window);
            }
        }

        self.show_pending_error_dialog(window, cx);

        let theme = Theme::from_appearance(window.appearance());

        let list_content = if self.controller.selection().is_empty() {
            self.render_empty_state(&theme).into_any_element()
        } else {
            self.render_file_rows(&theme, cx).into_any_element()
        };

        let on_external_drop = cx.listener(|this, paths: &ExternalPaths, _window, cx| {
            this.files_dropped(paths.paths());
            cx.notify();
        });
        let on_key_down = cx.listener(|this, event: &KeyDownEvent, _window, cx| {
            let keystroke = &event.keystroke;
            let command_held = keystroke.modifiers.platform || keystroke.modifiers.control;
            if this.handle_key(&keystroke.key, keystroke.key_char.as_deref(), command_held) {
                cx.notify();
            }
        });
        let on_select_files = cx.listener(|this, _: &SelectFiles, _window, cx| {
            this.select_files(cx);
        });
        let on_select_folder = cx.listener(|this, _: &SelectFolder, _window, cx| {
            this.select_folder(cx);
        });
        let on_convert = cx.listener(|this, _: &Convert, _window, cx| {
            this.start_conversion(cx);
        });
        let on_remove_selected = cx.listener(|this, _: &RemoveSelected, _window, cx| {
            this.remove_selected_rows();
            cx.notify();
        });
        let on_open_output_dir = cx.listener(|this, _: &OpenOutputDir, _window, cx| {
            this.open_output_dir();
            cx.notify();
        });

        let toolbar = self.render_toolbar(&theme, cx);
        let summary = self.render_summary(&theme, cx);

        let can_convert = self.controller.mode() != SelectionMode::Empty
            && self.controller.selection().output_dir().is_some();
        let status_bar = render_status_bar(
            StatusBarProps {
                status: self.status.clone(),
                errors: self.errors.clone(),
                can_convert,
                is_converting: self.is_converting(),
                theme,
            },
            cx,
            |view: &mut Self, cx| view.start_conversion(cx),
            |_view: &mut Self, cx| cx.quit(),
        );

        let mut container = div()
            .key_context("ConverterWindow")
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.bg)
            .text_color(theme.text);

        // Track focus if we have a focus handle
        if let Some(ref focus_handle) = self.focus_handle {
            container = container.track_focus(focus_handle);
        }

        container
            .on_key_down(on_key_down)
            .on_action(on_select_files)
            .on_action(on_select_folder)
            .on_action(on_convert)
            .on_action(on_remove_selected)
            .on_action(on_open_output_dir)
            // Handle external file drops on the entire window
            .on_drop(on_external_drop)
            .drag_over::<ExternalPaths>(move |style, _, _, _| style.bg(theme.bg_card_hover))
            .child(toolbar)
            .child(summary)
            // File list (scrollable)
            .child(
                div()
                    .id("file-list-scroll")
                    .flex_1()
                    .w_full()
                    .overflow_scroll()
                    .track_scroll(&self.scroll_handle)
                    .px_6()
                    .py_2()
                    .border_t_1()
                    .border_color(theme.border)
                    .child(list_content),
            )
            .child(status_bar)
    }
}
