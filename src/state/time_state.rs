//! TimeState - Backend Clock Display State

/// State for the time display region
#[derive(Debug, Clone, Default)]
pub struct TimeState {
    /// Latest pushed display string, overwritten on every event
    pub display: String,
}

impl TimeState {
    /// Overwrite the display with a new pushed value
    pub fn update(&mut self, display: String) {
        self.display = display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_overwrites() {
        let mut state = TimeState::default();
        state.update("12:00:00".to_string());
        assert_eq!(state.display, "12:00:00");

        state.update(String::new());
        assert_eq!(state.display, "");
    }
}
