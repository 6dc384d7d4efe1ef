//! Greet Backend Boundary
//!
//! The remote-call boundary of the application. The UI never talks to a
//! backend directly; it goes through an [`crate::services::GreetAdapter`]
//! holding a `GreetBackend` handle, so the backend can be swapped out for a
//! test double.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use serde_json::json;

use crate::constants::TIME_EVENT;
use crate::error::Result;
use crate::services::events::EventBus;
use crate::services::runtime::spawn_in_tokio;

/// Remote calls exposed by the greeting backend
#[async_trait]
pub trait GreetBackend: Send + Sync {
    /// Greet `name` and return the greeting string
    async fn greet(&self, name: &str) -> Result<String>;

    /// Heartbeat call; the return value is ignored by callers
    async fn sync_check(&self, timestamp: &str) -> Result<()>;
}

/// In-process backend implementation
///
/// Stands in for the backend process: resolves greetings locally and pushes
/// the wall clock on the `"time"` stream once per second.
pub struct LocalBackend {
    bus: EventBus,
}

impl LocalBackend {
    /// Create a backend that emits events on `bus`
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Start the clock feed: emit `{ "data": <RFC 2822 local time> }` on
    /// the `"time"` stream once per second, forever.
    pub fn start_time_feed(&self) {
        let bus = self.bus.clone();
        spawn_in_tokio(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            loop {
                ticker.tick().await;
                let now = Local::now().to_rfc2822();
                bus.emit(TIME_EVENT, json!({ "data": now }));
            }
        });
    }
}

#[async_trait]
impl GreetBackend for LocalBackend {
    async fn greet(&self, name: &str) -> Result<String> {
        Ok(format!("Hello {name}!"))
    }

    async fn sync_check(&self, timestamp: &str) -> Result<()> {
        tracing::info!("SyncCheck: {timestamp}");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::Error;
    use parking_lot::Mutex;

    /// Backend double that records every call it receives
    pub(crate) struct RecordingBackend {
        greets: Mutex<Vec<String>>,
        checks_tx: flume::Sender<String>,
        checks_rx: flume::Receiver<String>,
        fail_greet: bool,
    }

    impl RecordingBackend {
        pub fn new() -> Arc<Self> {
            Self::with_failure(false)
        }

        /// A backend whose greet calls always fail
        pub fn failing() -> Arc<Self> {
            Self::with_failure(true)
        }

        fn with_failure(fail_greet: bool) -> Arc<Self> {
            let (checks_tx, checks_rx) = flume::unbounded();
            Arc::new(Self {
                greets: Mutex::new(Vec::new()),
                checks_tx,
                checks_rx,
                fail_greet,
            })
        }

        /// Names passed to greet so far
        pub fn greet_calls(&self) -> Vec<String> {
            self.greets.lock().clone()
        }

        /// Channel of timestamps passed to sync_check
        pub fn checks(&self) -> flume::Receiver<String> {
            self.checks_rx.clone()
        }
    }

    #[async_trait]
    impl GreetBackend for RecordingBackend {
        async fn greet(&self, name: &str) -> Result<String> {
            self.greets.lock().push(name.to_string());
            if self.fail_greet {
                return Err(Error::Backend {
                    message: "greet unavailable".to_string(),
                });
            }
            Ok(format!("Hello {name}!"))
        }

        async fn sync_check(&self, timestamp: &str) -> Result<()> {
            let _ = self.checks_tx.send(timestamp.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::runtime::block_on;

    #[test]
    fn test_local_greet_format() {
        let backend = LocalBackend::new(EventBus::new());
        let greeting = block_on(backend.greet("Ada")).expect("greeting");
        assert_eq!(greeting, "Hello Ada!");
    }

    #[test]
    fn test_time_feed_emits_data_payload() {
        let bus = EventBus::new();
        let sub = bus.subscribe(TIME_EVENT);
        let backend = LocalBackend::new(bus);
        backend.start_time_feed();

        // The first tick fires immediately
        let event = sub
            .receiver()
            .recv_timeout(Duration::from_millis(1100))
            .expect("time event");
        let data = event.data();
        assert!(!data.is_empty());
        assert!(chrono::DateTime::parse_from_rfc2822(&data).is_ok());
    }
}
