//! TextInput Component
//!
//! Minimal editable single-line input: printable keys insert, backspace
//! deletes, enter fires the submit handler.

use gpui::{
    ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::UiColors;

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
    on_submit: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
            on_submit: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the submit handler (fired on enter)
    pub fn on_submit(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    fn emit_change(&self, cx: &mut Context<Self>) {
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control
            || keystroke.modifiers.alt
            || keystroke.modifiers.platform
            || keystroke.modifiers.function
        {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                self.value.pop();
                self.emit_change(cx);
            }
            "enter" => {
                if let Some(ref handler) = self.on_submit {
                    handler(&self.value, cx);
                }
            }
            _ => {
                if let Some(ref text) = keystroke.key_char {
                    self.value.push_str(text);
                    self.emit_change(cx);
                }
            }
        }
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            UiColors::border_focus()
        } else {
            UiColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if is_focused {
            // Trailing bar stands in for a caret
            SharedString::from(format!("{}▏", self.value))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            UiColors::input_placeholder()
        } else {
            UiColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                window.focus(&this.focus_handle);
                cx.notify();
            }))
            .px_3()
            .py_2()
            .bg(UiColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}
