//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, the home page, and the log panel. It also
//! runs the event pump that bridges service events to UI updates: every
//! display cell is written here, on the main loop, and nowhere else.

use gpui::{App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::home::page::HomePage;
use crate::theme::colors::UiColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    home_page: Entity<HomePage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));
        let home_page = cx.new(|cx| HomePage::new(entities.clone(), cx));

        // Start event pump
        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            home_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(UiColors::content_bg())
                    .child(self.home_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::GreetingResolved {
            request_id,
            greeting,
        } => {
            entities.greet.update(cx, |state, cx| {
                state.resolve(&request_id, greeting);
                cx.notify();
            });
        }
        AppEvent::GreetFailed { request_id, error } => {
            // The error was already logged by the hub; only release the
            // pending marker so the display keeps its prior value.
            tracing::debug!("greet request {request_id} failed: {error}");
            entities.greet.update(cx, |state, cx| {
                state.fail(&request_id);
                cx.notify();
            });
        }
        AppEvent::TimeUpdated { display } => {
            entities.time.update(cx, |state, cx| {
                state.update(display);
                cx.notify();
            });
        }
    }
}
