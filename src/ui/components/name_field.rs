//! Output name field
//!
//! Inline text entry for the single-file output name. Editing state and key
//! handling live here; the window routes key events to it while editing.

use gpui::{Context, IntoElement, SharedString, div, prelude::*, px};

use crate::core::naming::is_valid_name_char;
use crate::ui::Theme;

/// Maximum name length in characters
const MAX_LENGTH: usize = 128;

/// What a key press did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Text changed (or the key was swallowed)
    Edited,
    /// Enter: keep the text
    Commit,
    /// Escape: throw the edit away
    Cancel,
    /// Not for us
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct NameField {
    text: String,
    editing: bool,
}

impl NameField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Replace the shown text (leaves edit mode)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.editing = false;
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn end_edit(&mut self) {
        self.editing = false;
    }

    /// Handle one key press while editing
    ///
    /// `command_held` suppresses text input so shortcuts still work.
    pub fn handle_key(&mut self, key: &str, key_char: Option<&str>, command_held: bool) -> FieldKey {
        if !self.editing {
            return FieldKey::Ignored;
        }

        match key {
            "backspace" => {
                self.text.pop();
                return FieldKey::Edited;
            }
            "enter" => return FieldKey::Commit,
            "escape" => return FieldKey::Cancel,
            _ => {}
        }

        if command_held {
            return FieldKey::Ignored;
        }

        match key_char {
            Some(chars) => {
                for c in chars.chars().filter(|c| is_valid_name_char(*c)) {
                    if self.text.chars().count() >= MAX_LENGTH {
                        break;
                    }
                    self.text.push(c);
                }
                FieldKey::Edited
            }
            None => FieldKey::Ignored,
        }
    }
}

/// Properties for rendering the name field
pub struct NameFieldProps {
    pub text: String,
    pub editable: bool,
    pub editing: bool,
    pub theme: Theme,
}

/// Render the field; clicking an editable field starts editing
pub fn render_name_field<V: 'static>(
    props: NameFieldProps,
    cx: &mut Context<V>,
    on_click: impl Fn(&mut V) + 'static,
) -> impl IntoElement {
    let NameFieldProps {
        text,
        editable,
        editing,
        theme,
    } = props;

    div()
        .id(SharedString::from("output-name-input"))
        .flex_1()
        .h(px(30.))
        .px_2()
        .flex()
        .items_center()
        .bg(theme.bg_card)
        .border_1()
        .border_color(if editing { theme.accent } else { theme.border })
        .rounded_md()
        .when(editable, |el| el.cursor_text())
        .on_click(cx.listener(move |view, _event, _window, cx| {
            if editable {
                on_click(view);
                cx.notify();
            }
        }))
        .child(
            div()
                .text_sm()
                .text_color(if editable { theme.text } else { theme.text_muted })
                .when(!editable, |el| el.italic())
                .child(if text.is_empty() { " ".to_string() } else { text }),
        )
        .when(editing, |el| {
            el.child(div().w(px(2.)).h(px(18.)).bg(theme.accent).ml_px())
        })
}
