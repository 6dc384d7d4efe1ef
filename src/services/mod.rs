//! Service Layer
//!
//! The service layer wraps the remote-call boundary (the greet backend) and
//! the backend->frontend event stream, and drives the periodic sync-check.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                              │
//! │  ┌──────────────┐  ┌─────────────┐  ┌──────────────────┐    │
//! │  │ GreetAdapter │  │  EventBus   │  │     SyncLoop     │    │
//! │  │ (calls)      │  │  ("time")   │  │  (1s heartbeat)  │    │
//! │  └──────────────┘  └─────────────┘  └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Workspace event pump                        │
//! │              (GreetState, TimeState, LogState)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod backend;
mod events;
mod greet;
mod hub;
mod runtime;
mod sync_loop;

pub use backend::*;
pub use events::*;
pub use greet::*;
pub use hub::*;
pub use runtime::*;
pub use sync_loop::*;
