//! Application Constants
//!
//! Centralized constants for layout, channels, and timing.

/// Name of the backend-pushed clock event stream
pub const TIME_EVENT: &str = "time";

/// Name substituted when the user submits an empty input
pub const DEFAULT_GREET_NAME: &str = "anonymous";

/// Period of the frontend sync-check loop
pub const SYNC_INTERVAL_MS: u64 = 1000;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Log ring buffer capacity
pub const LOG_CAPACITY: usize = 2000;
