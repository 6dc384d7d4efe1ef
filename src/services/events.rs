//! Event Stream
//!
//! Named backend -> frontend push channels. The backend emits a payload
//! under an event name; subscribers receive payloads asynchronously in the
//! order the channel delivers them.
//!
//! Subscriptions are scoped: dropping a [`Subscription`] unregisters it
//! from the bus, so a component that subscribes on start releases the
//! channel on teardown.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde_json::Value;

/// A single event delivered on a named stream
#[derive(Clone, Debug)]
pub struct RemoteEvent {
    /// Name of the stream this event was emitted on
    pub name: Arc<str>,
    /// Opaque event payload
    pub payload: Value,
}

impl RemoteEvent {
    /// Extract the `data` field as a string, empty if missing or malformed
    pub fn data(&self) -> String {
        self.payload
            .get("data")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

type TopicMap = HashMap<String, Vec<(u64, flume::Sender<RemoteEvent>)>>;

/// Named pub/sub bus connecting the backend to frontend subscribers
#[derive(Clone, Default)]
pub struct EventBus {
    topics: Arc<Mutex<TopicMap>>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a payload to all current subscribers of `name`
    ///
    /// Subscribers whose channel has been closed are pruned.
    pub fn emit(&self, name: &str, payload: Value) {
        let mut topics = self.topics.lock();
        if let Some(subs) = topics.get_mut(name) {
            let event = RemoteEvent {
                name: Arc::from(name),
                payload,
            };
            subs.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        }
    }

    /// Register a subscriber for the stream `name`
    pub fn subscribe(&self, name: &str) -> Subscription {
        let (tx, rx) = flume::unbounded();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.topics
            .lock()
            .entry(name.to_string())
            .or_default()
            .push((id, tx));

        Subscription {
            name: name.to_string(),
            id,
            topics: Arc::downgrade(&self.topics),
            rx,
        }
    }

    /// Number of live subscribers for a stream
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.topics.lock().get(name).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("topics", &self.topics.lock().keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Handle to a single registration on the bus
///
/// Dropping the subscription unregisters it; pending receivers cloned from
/// it observe a closed channel.
pub struct Subscription {
    name: String,
    id: u64,
    topics: Weak<Mutex<TopicMap>>,
    rx: flume::Receiver<RemoteEvent>,
}

impl Subscription {
    /// Clone the receiving end of the channel
    pub fn receiver(&self) -> flume::Receiver<RemoteEvent> {
        self.rx.clone()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(topics) = self.topics.upgrade() {
            let mut topics = topics.lock();
            if let Some(subs) = topics.get_mut(&self.name) {
                subs.retain(|(id, _)| *id != self.id);
                if subs.is_empty() {
                    topics.remove(&self.name);
                }
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emit_delivers_to_subscriber() {
        let bus = EventBus::new();
        let sub = bus.subscribe("time");

        bus.emit("time", json!({ "data": "12:00:00" }));

        let event = sub.receiver().recv().expect("event");
        assert_eq!(&*event.name, "time");
        assert_eq!(event.data(), "12:00:00");
    }

    #[test]
    fn test_missing_data_field_is_empty_string() {
        let bus = EventBus::new();
        let sub = bus.subscribe("time");

        bus.emit("time", json!({ "other": 1 }));
        assert_eq!(sub.receiver().recv().expect("event").data(), "");

        bus.emit("time", json!({ "data": 42 }));
        assert_eq!(sub.receiver().recv().expect("event").data(), "");
    }

    #[test]
    fn test_emit_without_subscribers_is_noop() {
        let bus = EventBus::new();
        bus.emit("time", json!({ "data": "x" }));
        assert_eq!(bus.subscriber_count("time"), 0);
    }

    #[test]
    fn test_drop_unregisters_subscription() {
        let bus = EventBus::new();
        let sub = bus.subscribe("time");
        let rx = sub.receiver();
        assert_eq!(bus.subscriber_count("time"), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count("time"), 0);

        bus.emit("time", json!({ "data": "late" }));
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_streams_are_independent() {
        let bus = EventBus::new();
        let time_sub = bus.subscribe("time");
        let other_sub = bus.subscribe("other");

        bus.emit("time", json!({ "data": "tick" }));

        assert_eq!(time_sub.receiver().recv().expect("event").data(), "tick");
        assert!(other_sub.receiver().try_recv().is_err());
    }
}
