//! Greet Adapter
//!
//! Thin wrapper over the remote-call boundary. One adapter is constructed
//! per UI root and passed down explicitly; nothing in the crate reaches for
//! module-level bindings.

use std::sync::Arc;

use crate::error::Result;
use crate::services::backend::GreetBackend;
use crate::services::runtime::spawn_in_tokio;

/// Handle for the two remote calls the UI makes
#[derive(Clone)]
pub struct GreetAdapter {
    backend: Arc<dyn GreetBackend>,
}

impl GreetAdapter {
    /// Wrap a backend handle
    pub fn new(backend: Arc<dyn GreetBackend>) -> Self {
        Self { backend }
    }

    /// Send `name` to the greeting service and resolve the greeting
    ///
    /// No timeout, no retry. Callers decide the empty-input policy before
    /// calling.
    pub async fn greet(&self, name: &str) -> Result<String> {
        self.backend.greet(name).await
    }

    /// Fire-and-forget heartbeat
    ///
    /// Spawns an independent task per call; overlapping in-flight calls are
    /// possible and allowed. Failures are logged and never observed by the
    /// caller.
    pub fn sync_check(&self, timestamp: String) {
        let backend = self.backend.clone();
        spawn_in_tokio(async move {
            if let Err(e) = backend.sync_check(&timestamp).await {
                tracing::debug!("sync check failed: {e}");
            }
        });
    }
}

impl std::fmt::Debug for GreetAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetAdapter").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::backend::testing::RecordingBackend;
    use crate::services::runtime::block_on;
    use std::time::Duration;

    #[test]
    fn test_greet_passes_name_verbatim() {
        let backend = RecordingBackend::new();
        let adapter = GreetAdapter::new(backend.clone());

        let greeting = block_on(adapter.greet("Grace Hopper")).expect("greeting");

        assert_eq!(greeting, "Hello Grace Hopper!");
        assert_eq!(backend.greet_calls(), vec!["Grace Hopper".to_string()]);
    }

    #[test]
    fn test_greet_propagates_backend_error() {
        let backend = RecordingBackend::failing();
        let adapter = GreetAdapter::new(backend);

        assert!(block_on(adapter.greet("Ada")).is_err());
    }

    #[test]
    fn test_sync_check_is_fire_and_forget() {
        let backend = RecordingBackend::new();
        let adapter = GreetAdapter::new(backend.clone());

        adapter.sync_check("2024-01-01T00:00:00.000Z".to_string());

        let received = backend
            .checks()
            .recv_timeout(Duration::from_millis(500))
            .expect("sync check");
        assert_eq!(received, "2024-01-01T00:00:00.000Z");
    }
}
