//! ServiceHub - Unified Service Management
//!
//! Owns the greet adapter, the time subscription, and the sync loop, and
//! provides a single point of control for the UI layer. Commands come in on
//! a channel and are processed on the tokio runtime; completions go back to
//! the UI as [`AppEvent`]s through the workspace event pump.

use std::sync::Arc;
use std::time::Duration;

use gpui::Global;
use parking_lot::Mutex;

use crate::constants::TIME_EVENT;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::backend::GreetBackend;
use crate::services::events::{EventBus, Subscription};
use crate::services::greet::GreetAdapter;
use crate::services::runtime::spawn_in_tokio;
use crate::services::sync_loop::{SyncLoop, SyncLoopHandle};

/// Commands that can be sent to the service layer
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Resolve a greeting for `name`
    Greet { request_id: String, name: String },
    /// Fire-and-forget heartbeat
    SyncCheck { timestamp: String },
}

/// Central hub between the UI and the backend boundary
pub struct ServiceHub {
    /// Channel to send events to the UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the service layer
    command_tx: flume::Sender<ServiceCommand>,
    /// Remote-call adapter, injected at construction
    adapter: GreetAdapter,
    /// Backend -> frontend event streams
    bus: EventBus,
    /// Sync loop period
    sync_interval: Duration,
    /// Live `"time"` subscription, held so teardown unregisters it
    time_sub: Mutex<Option<Subscription>>,
    /// Live sync loop, stopped on drop
    sync_loop: Mutex<Option<SyncLoopHandle>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub around an injected backend handle
    pub fn new(
        backend: Arc<dyn GreetBackend>,
        bus: EventBus,
        event_tx: flume::Sender<AppEvent>,
        config: &AppConfig,
    ) -> Self {
        let adapter = GreetAdapter::new(backend);
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let hub = Self {
            event_tx,
            command_tx,
            adapter,
            bus,
            sync_interval: Duration::from_millis(config.sync.interval_ms),
            time_sub: Mutex::new(None),
            sync_loop: Mutex::new(None),
        };

        hub.start_command_handler(command_rx);
        let _ = hub.event_tx.send(AppEvent::info("ServiceHub initialized"));

        hub
    }

    /// Process commands on the tokio runtime
    fn start_command_handler(&self, command_rx: flume::Receiver<ServiceCommand>) {
        let adapter = self.adapter.clone();
        let event_tx = self.event_tx.clone();

        spawn_in_tokio(async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                match cmd {
                    ServiceCommand::Greet { request_id, name } => {
                        match adapter.greet(&name).await {
                            Ok(greeting) => {
                                let _ = event_tx.send(AppEvent::GreetingResolved {
                                    request_id,
                                    greeting,
                                });
                            }
                            Err(e) => {
                                // Log only; the greeting display keeps its prior value
                                let _ = event_tx.send(AppEvent::error(format!(
                                    "Greet failed: {e}"
                                )));
                                let _ = event_tx.send(AppEvent::GreetFailed {
                                    request_id,
                                    error: e.to_string(),
                                });
                            }
                        }
                    }
                    ServiceCommand::SyncCheck { timestamp } => {
                        adapter.sync_check(timestamp);
                    }
                }
            }
        });
    }

    /// Subscribe to the `"time"` stream and start the sync loop
    pub fn start(&self) {
        let sub = self.bus.subscribe(TIME_EVENT);
        let rx = sub.receiver();
        *self.time_sub.lock() = Some(sub);

        let event_tx = self.event_tx.clone();
        spawn_in_tokio(async move {
            // Ends when the subscription is dropped and the channel closes
            while let Ok(event) = rx.recv_async().await {
                let _ = event_tx.send(AppEvent::TimeUpdated {
                    display: event.data(),
                });
            }
        });

        *self.sync_loop.lock() = Some(SyncLoop::start(
            self.command_tx.clone(),
            self.event_tx.clone(),
            self.sync_interval,
        ));

        let _ = self.event_tx.send(AppEvent::info("Services started"));
    }

    /// Tear down the time subscription and the sync loop
    pub fn stop(&self) {
        self.time_sub.lock().take();
        self.sync_loop.lock().take();
        let _ = self.event_tx.send(AppEvent::info("Services stopped"));
    }

    /// Queue a greet call; returns the request id for correlation
    pub fn greet(&self, name: impl Into<String>) -> String {
        let request_id = uuid::Uuid::new_v4().to_string();
        let _ = self.command_tx.send(ServiceCommand::Greet {
            request_id: request_id.clone(),
            name: name.into(),
        });
        request_id
    }

    /// Queue a one-off sync check
    pub fn sync_check(&self, timestamp: impl Into<String>) {
        let _ = self.command_tx.send(ServiceCommand::SyncCheck {
            timestamp: timestamp.into(),
        });
    }

    /// Whether the time subscription and sync loop are live
    pub fn is_running(&self) -> bool {
        self.sync_loop.lock().is_some()
    }

    /// Send a log event to the diagnostic stream
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::backend::testing::RecordingBackend;
    use serde_json::json;

    fn wait_for<F>(rx: &flume::Receiver<AppEvent>, mut pred: F) -> Option<AppEvent>
    where
        F: FnMut(&AppEvent) -> bool,
    {
        let deadline = std::time::Instant::now() + Duration::from_millis(2000);
        while std::time::Instant::now() < deadline {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(event) if pred(&event) => return Some(event),
                Ok(_) => continue,
                Err(flume::RecvTimeoutError::Timeout) => continue,
                Err(flume::RecvTimeoutError::Disconnected) => break,
            }
        }
        None
    }

    #[test]
    fn test_greet_resolves_to_display_value() {
        let backend = RecordingBackend::new();
        let (tx, rx) = flume::unbounded();
        let hub = ServiceHub::new(backend.clone(), EventBus::new(), tx, &AppConfig::default());

        let id = hub.greet("Ada");

        let event = wait_for(&rx, |e| matches!(e, AppEvent::GreetingResolved { .. }))
            .expect("greeting resolved");
        match event {
            AppEvent::GreetingResolved {
                request_id,
                greeting,
            } => {
                assert_eq!(request_id, id);
                assert_eq!(greeting, "Hello Ada!");
            }
            _ => unreachable!(),
        }
        assert_eq!(backend.greet_calls(), vec!["Ada".to_string()]);
    }

    #[test]
    fn test_greet_failure_logs_and_never_resolves() {
        let backend = RecordingBackend::failing();
        let (tx, rx) = flume::unbounded();
        let hub = ServiceHub::new(backend, EventBus::new(), tx, &AppConfig::default());

        hub.greet("Ada");

        let mut saw_failed = false;
        while let Some(event) = wait_for(&rx, |e| {
            matches!(
                e,
                AppEvent::GreetFailed { .. } | AppEvent::GreetingResolved { .. }
            )
        }) {
            match event {
                AppEvent::GreetFailed { .. } => {
                    saw_failed = true;
                    break;
                }
                AppEvent::GreetingResolved { .. } => panic!("failed call must not resolve"),
                _ => {}
            }
        }
        assert!(saw_failed);
    }

    #[test]
    fn test_sync_check_dispatches_to_backend() {
        let backend = RecordingBackend::new();
        let (tx, _rx) = flume::unbounded();
        let hub = ServiceHub::new(backend.clone(), EventBus::new(), tx, &AppConfig::default());

        hub.sync_check("2024-01-01T00:00:00.000Z");

        let received = backend
            .checks()
            .recv_timeout(Duration::from_millis(1000))
            .expect("sync check");
        assert_eq!(received, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_time_events_are_forwarded() {
        let backend = RecordingBackend::new();
        let bus = EventBus::new();
        let (tx, rx) = flume::unbounded();
        let hub = ServiceHub::new(backend, bus.clone(), tx, &AppConfig::default());
        hub.start();

        bus.emit(TIME_EVENT, json!({ "data": "12:00:00" }));
        let event = wait_for(&rx, |e| matches!(e, AppEvent::TimeUpdated { .. }))
            .expect("time forwarded");
        match event {
            AppEvent::TimeUpdated { display } => assert_eq!(display, "12:00:00"),
            _ => unreachable!(),
        }

        // A payload without `data` still updates, to the empty string
        bus.emit(TIME_EVENT, json!({}));
        let event = wait_for(&rx, |e| {
            matches!(e, AppEvent::TimeUpdated { display } if display.is_empty())
        });
        assert!(event.is_some());
    }

    #[test]
    fn test_stop_releases_time_subscription() {
        let backend = RecordingBackend::new();
        let bus = EventBus::new();
        let (tx, _rx) = flume::unbounded();
        let hub = ServiceHub::new(backend, bus.clone(), tx, &AppConfig::default());

        hub.start();
        assert!(hub.is_running());
        assert_eq!(bus.subscriber_count(TIME_EVENT), 1);

        hub.stop();
        assert!(!hub.is_running());
        assert_eq!(bus.subscriber_count(TIME_EVENT), 0);
    }
}
