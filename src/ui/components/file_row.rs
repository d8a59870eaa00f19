//! FileRow component - One selected `.ui` file in the list

use gpui::{
    Context, IntoElement, MouseButton, MouseDownEvent, SharedString, div, prelude::*,
};

use crate::ui::Theme;

/// Properties for rendering a file row
pub struct FileRowProps {
    pub index: usize,
    pub file_name: String,
    pub output_name: String,
    pub is_selected: bool,
    pub show_context_menu: bool,
    pub theme: Theme,
}

/// Renders a single file row
///
/// Stateless like the other list renderers: the row's index and selection
/// belong to the parent window.
pub fn render_file_row<V: 'static>(
    props: FileRowProps,
    cx: &mut Context<V>,
    on_select: impl Fn(&mut V, usize, bool) + 'static,
    on_context_menu: impl Fn(&mut V, usize) + 'static,
    on_remove: impl Fn(&mut V, usize) + 'static,
) -> impl IntoElement {
    let FileRowProps {
        index,
        file_name,
        output_name,
        is_selected,
        show_context_menu,
        theme,
    } = props;

    let row = div()
        .id(SharedString::from(format!("file-row-{}", index)))
        .w_full()
        .px_3()
        .py_2()
        .flex()
        .items_center()
        .justify_between()
        .rounded_md()
        .bg(if is_selected { theme.bg_selected } else { theme.bg_card })
        .hover(|s| s.bg(if is_selected { theme.bg_selected } else { theme.bg_card_hover }))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |view, event: &MouseDownEvent, _window, cx| {
                let additive = event.modifiers.platform || event.modifiers.control;
                on_select(view, index, additive);
                cx.notify();
            }),
        )
        .on_mouse_down(
            MouseButton::Right,
            cx.listener(move |view, _event: &MouseDownEvent, _window, cx| {
                on_context_menu(view, index);
                cx.notify();
            }),
        )
        .child(
            div()
                .text_sm()
                .text_color(theme.text)
                .overflow_hidden()
                .text_ellipsis()
                .child(file_name),
        )
        .child(
            div()
                .text_xs()
                .text_color(theme.text_muted)
                .child(format!("→ {}", output_name)),
        );

    div()
        .w_full()
        .flex()
        .flex_col()
        .child(row)
        .when(show_context_menu, |el| {
            el.child(
                div()
                    .id(SharedString::from(format!("file-row-menu-{}", index)))
                    .ml_6()
                    .mt_1()
                    .px_3()
                    .py_1()
                    .w_40()
                    .bg(theme.bg_card)
                    .border_1()
                    .border_color(theme.border)
                    .rounded_md()
                    .shadow_lg()
                    .text_sm()
                    .text_color(theme.danger)
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.bg_card_hover))
                    .on_click(cx.listener(move |view, _event, _window, cx| {
                        on_remove(view, index);
                        cx.notify();
                    }))
                    .child("Remove from list"),
            )
        })
}
