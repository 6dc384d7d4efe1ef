//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the clock cell changes every second,
//! the greeting only on submit.

use gpui::{App, AppContext, Entity, Global};

use crate::constants::LOG_CAPACITY;
use crate::state::{
    config_state::ConfigState, greet_state::GreetState, i18n_state::I18nState,
    log_state::LogState, time_state::TimeState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Latest greeting display state
    pub greet: Entity<GreetState>,
    /// Backend clock display state
    pub time: Entity<TimeState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            config: cx.new(|_| ConfigState::default()),
            greet: cx.new(|_| GreetState::default()),
            time: cx.new(|_| TimeState::default()),
            logs: cx.new(|_| LogState::new(LOG_CAPACITY)),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}
