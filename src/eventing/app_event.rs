//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// A greet call resolved with a greeting string
    GreetingResolved {
        request_id: String,
        greeting: String,
    },

    /// A greet call failed; the greeting display keeps its prior value
    GreetFailed { request_id: String, error: String },

    /// The backend clock pushed a new display string
    TimeUpdated { display: String },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}
