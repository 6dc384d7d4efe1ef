//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::{EventBus, LocalBackend, ServiceHub};
use crate::utils::config_store;

actions!(greet, [Quit]);

/// Run the Greet GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Load persisted configuration, falling back to defaults
        let config = match config_store::load_config::<AppConfig>("config.json") {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                AppConfig::default()
            }
        };
        entities.config.update(cx, |state, cx| {
            state.update_config(config.clone());
            cx.notify();
        });

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // One backend handle per UI root, injected explicitly into the hub
        let bus = EventBus::new();
        let backend = Arc::new(LocalBackend::new(bus.clone()));
        backend.start_time_feed();

        let service_hub = ServiceHub::new(backend, bus, event_tx, &config);
        service_hub.start();
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Greet Demo")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
