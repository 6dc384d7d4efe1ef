//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but the service layer (backend calls, event
//! feeds, the sync loop) lives on tokio. This module provides a bridge to
//! run tokio futures from GPUI context.

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task in the tokio runtime
///
/// Used for long-running background tasks like the time feed and the sync
/// loop. The task runs independently and its result is not awaited.
pub fn spawn_in_tokio<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}

/// Block on a future synchronously (use sparingly, mainly for initialization)
///
/// **Warning**: This blocks the current thread.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_in_tokio() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        spawn_in_tokio(async move {
            flag_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_block_on() {
        let value = block_on(async { 41 + 1 });
        assert_eq!(value, 42);
    }
}
