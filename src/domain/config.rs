//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GREET_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, SYNC_INTERVAL_MS,
};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Sync-check loop configuration
    pub sync: SyncConfig,
    /// Greeting configuration
    pub greet: GreetConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Sync-check loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Interval between sync-check calls in milliseconds
    pub interval_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: SYNC_INTERVAL_MS,
        }
    }
}

/// Greeting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetConfig {
    /// Name substituted when the input field is empty
    pub default_name: String,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_GREET_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.sync.interval_ms, 1000);
        assert_eq!(config.greet.default_name, "anonymous");
        assert_eq!(config.window.width, 400.0);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: AppConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.greet.default_name, config.greet.default_name);
    }
}
