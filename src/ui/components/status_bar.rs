//! StatusBar component - Status line, error list and the Convert/Exit buttons

use gpui::{Context, IntoElement, SharedString, div, prelude::*};

use crate::ui::Theme;

/// Properties for the status bar
pub struct StatusBarProps {
    pub status: String,
    pub errors: Vec<String>,
    pub can_convert: bool,
    pub is_converting: bool,
    pub theme: Theme,
}

/// Render the status bar
///
/// Status text and errors on the left, action buttons on the right.
pub fn render_status_bar<V: 'static>(
    props: StatusBarProps,
    cx: &mut Context<V>,
    on_convert: impl Fn(&mut V, &mut Context<V>) + 'static,
    on_exit: impl Fn(&mut V, &mut Context<V>) + 'static,
) -> impl IntoElement {
    let StatusBarProps {
        status,
        errors,
        can_convert,
        is_converting,
        theme,
    } = props;

    let convert_enabled = can_convert && !is_converting;
    let convert_label = if is_converting { "Converting..." } else { "Convert" };

    let mut error_list = div().flex().flex_col().gap_1();
    for error in errors {
        error_list = error_list.child(
            div()
                .text_xs()
                .text_color(theme.danger)
                .overflow_hidden()
                .text_ellipsis()
                .child(error),
        );
    }

    div()
        .py_3()
        .px_6()
        .flex()
        .items_center()
        .justify_between()
        .gap_4()
        .bg(theme.bg)
        .border_t_1()
        .border_color(theme.border)
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .gap_1()
                .overflow_hidden()
                .child(
                    div()
                        .id(SharedString::from("status-label"))
                        .text_sm()
                        .text_color(theme.text)
                        .child(status),
                )
                .child(error_list),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .child(
                    div()
                        .id(SharedString::from("convert-button"))
                        .px_4()
                        .py_2()
                        .text_sm()
                        .rounded_md()
                        .text_color(gpui::white())
                        .bg(if convert_enabled { theme.success } else { theme.disabled })
                        .when(convert_enabled, |el| {
                            el.cursor_pointer().hover(|s| s.bg(theme.success_hover))
                        })
                        .on_click(cx.listener(move |view, _event, _window, cx| {
                            if convert_enabled {
                                on_convert(view, cx);
                            }
                        }))
                        .child(convert_label),
                )
                .child(
                    div()
                        .id(SharedString::from("exit-button"))
                        .px_4()
                        .py_2()
                        .text_sm()
                        .rounded_md()
                        .bg(theme.bg_card)
                        .text_color(theme.text)
                        .border_1()
                        .border_color(theme.border)
                        .cursor_pointer()
                        .hover(|s| s.bg(theme.bg_card_hover))
                        .on_click(cx.listener(move |view, _event, _window, cx| {
                            on_exit(view, cx);
                        }))
                        .child("Exit"),
                ),
        )
}
