//! Home Page
//!
//! One text input, one greet button, and two read-only display regions:
//! the latest greeting and the backend-pushed clock.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{TextInput, text_input};
use crate::features::home::controller::HomeController;
use crate::i18n::t;
use crate::theme::colors::UiColors;

/// Home page component
pub struct HomePage {
    entities: AppEntities,
    controller: HomeController,
    name_input: Entity<TextInput>,
}

impl HomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = HomeController::new(entities.clone());

        let locale = entities.i18n.read(cx).locale;
        let name_input = text_input("name-input", t(locale, "home-name-placeholder"), cx);

        // Enter in the input submits, same as the button
        name_input.update(cx, |input, _| {
            let controller = controller.clone();
            input.on_submit(move |value, cx| {
                controller.submit(value, cx);
            });
        });

        // Observe display state changes
        cx.observe(&entities.greet, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.time, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes, keeping the placeholder in sync
        let input = name_input.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "home-name-placeholder"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            name_input,
        }
    }

    fn render_display_region(
        &self,
        title: SharedString,
        value: &str,
        empty_label: SharedString,
    ) -> impl IntoElement {
        let (text, color) = if value.is_empty() {
            (empty_label, UiColors::text_muted())
        } else {
            (SharedString::from(value.to_string()), UiColors::text_primary())
        };

        div()
            .w_full()
            .bg(UiColors::content_bg())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .bg(UiColors::header_bg())
                    .text_color(UiColors::text_header())
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(title),
            )
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_3()
                    .text_size(px(16.0))
                    .text_color(color)
                    .child(text),
            )
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let greeting = self.entities.greet.read(cx).greeting.clone();
        let pending = self.entities.greet.read(cx).is_pending();
        let time_display = self.entities.time.read(cx).display.clone();

        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            // Greet form
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_secondary())
                            .child(t(locale, "home-name-label")),
                    )
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(div().flex_1().child(self.name_input.clone()))
                            .child(
                                Button::primary("greet-btn", t(locale, "action-greet"))
                                    .disabled(pending)
                                    .on_click(cx.listener(
                                        move |this, _event: &ClickEvent, _window, cx| {
                                            let value =
                                                this.name_input.read(cx).value().to_string();
                                            this.controller.submit(&value, cx);
                                        },
                                    )),
                            ),
                    ),
            )
            // Greeting display
            .child(self.render_display_region(
                t(locale, "home-greeting-title"),
                &greeting,
                t(locale, "home-greeting-empty"),
            ))
            // Backend clock display
            .child(self.render_display_region(
                t(locale, "home-time-title"),
                &time_display,
                t(locale, "home-time-empty"),
            ))
    }
}
