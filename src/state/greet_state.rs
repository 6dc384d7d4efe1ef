//! GreetState - Latest Greeting Display State

/// State for the greeting display region
#[derive(Debug, Clone, Default)]
pub struct GreetState {
    /// Latest resolved greeting, displayed verbatim
    pub greeting: String,
    /// Request id of the in-flight greet call, if any
    pub pending_request: Option<String>,
}

impl GreetState {
    /// Record a submitted greet call
    pub fn begin_request(&mut self, request_id: String) {
        self.pending_request = Some(request_id);
    }

    /// Apply a resolved greeting
    ///
    /// The display is overwritten only on success; failures clear the
    /// pending marker and leave the greeting untouched.
    pub fn resolve(&mut self, request_id: &str, greeting: String) {
        self.greeting = greeting;
        self.clear_request(request_id);
    }

    /// Clear the pending marker after a failed call
    pub fn fail(&mut self, request_id: &str) {
        self.clear_request(request_id);
    }

    fn clear_request(&mut self, request_id: &str) {
        if self.pending_request.as_deref() == Some(request_id) {
            self.pending_request = None;
        }
    }

    /// Whether a greet call is in flight
    pub fn is_pending(&self) -> bool {
        self.pending_request.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_overwrites_greeting() {
        let mut state = GreetState::default();
        state.begin_request("r1".to_string());
        state.resolve("r1", "Hello Ada!".to_string());

        assert_eq!(state.greeting, "Hello Ada!");
        assert!(!state.is_pending());
    }

    #[test]
    fn test_failure_keeps_prior_greeting() {
        let mut state = GreetState::default();
        state.resolve("r1", "Hello Ada!".to_string());

        state.begin_request("r2".to_string());
        state.fail("r2");

        assert_eq!(state.greeting, "Hello Ada!");
        assert!(!state.is_pending());
    }

    #[test]
    fn test_stale_request_does_not_clear_newer_pending() {
        let mut state = GreetState::default();
        state.begin_request("r2".to_string());
        state.fail("r1");
        assert!(state.is_pending());
    }
}
