//! Periodic Sync Loop
//!
//! Fires a fixed-interval heartbeat: capture the current instant as an
//! ISO-8601 string, log it, and queue a sync-check command on the hub's
//! command channel. Ticks are scheduled independent of call completion, so
//! overlapping in-flight calls are possible. There is no drift correction.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use crate::eventing::app_event::AppEvent;
use crate::services::hub::ServiceCommand;
use crate::services::runtime::spawn_in_tokio;

/// Driver for the periodic sync-check
pub struct SyncLoop;

impl SyncLoop {
    /// Start the loop; it runs until the returned handle is dropped
    pub fn start(
        command_tx: flume::Sender<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
        interval: Duration,
    ) -> SyncLoopHandle {
        let (stop_tx, stop_rx) = flume::bounded::<()>(1);

        spawn_in_tokio(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                        tracing::debug!("SyncCheck: {timestamp}");
                        let _ = event_tx.send(AppEvent::debug(format!("SyncCheck: {timestamp}")));
                        let _ = command_tx.send(ServiceCommand::SyncCheck { timestamp });
                    }
                    _ = stop_rx.recv_async() => break,
                }
            }
        });

        SyncLoopHandle { _stop_tx: stop_tx }
    }
}

/// Keeps the loop alive; dropping it stops further ticks
pub struct SyncLoopHandle {
    _stop_tx: flume::Sender<()>,
}

impl std::fmt::Debug for SyncLoopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncLoopHandle").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::log_state::LogLevel;

    fn next_timestamp(rx: &flume::Receiver<ServiceCommand>, wait: Duration) -> String {
        match rx.recv_timeout(wait).expect("tick") {
            ServiceCommand::SyncCheck { timestamp } => timestamp,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_ticks_with_iso_timestamps() {
        let (command_tx, command_rx) = flume::unbounded();
        let (tx, rx) = flume::unbounded();

        let _handle = SyncLoop::start(command_tx, tx, Duration::from_millis(20));

        let first = next_timestamp(&command_rx, Duration::from_millis(1100));
        let second = next_timestamp(&command_rx, Duration::from_millis(1100));

        let t1 = chrono::DateTime::parse_from_rfc3339(&first).expect("iso timestamp");
        let t2 = chrono::DateTime::parse_from_rfc3339(&second).expect("iso timestamp");
        assert!(t1 <= t2);

        // Each tick also lands on the diagnostic stream with a fixed prefix
        match rx.recv_timeout(Duration::from_millis(500)).expect("log") {
            AppEvent::Log { level, message, .. } => {
                assert_eq!(level, LogLevel::Debug);
                assert!(message.starts_with("SyncCheck: "));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_drop_stops_ticks() {
        let (command_tx, command_rx) = flume::unbounded();
        let (tx, _rx) = flume::unbounded();

        let handle = SyncLoop::start(command_tx, tx, Duration::from_millis(20));
        next_timestamp(&command_rx, Duration::from_millis(1100));

        drop(handle);
        // Let the loop observe the stop signal and in-flight ticks land
        std::thread::sleep(Duration::from_millis(100));
        while command_rx.try_recv().is_ok() {}

        std::thread::sleep(Duration::from_millis(150));
        assert!(command_rx.try_recv().is_err());
    }
}
