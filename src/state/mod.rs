//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders. Every cell is
//! written by exactly one producer, on the main loop, via the workspace
//! event pump.

pub mod config_state;
pub mod greet_state;
pub mod i18n_state;
pub mod log_state;
pub mod time_state;
