//! Home Controller
//!
//! Decides the empty-input policy and routes greet submissions to the
//! service hub.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::ServiceHub;

/// Home page controller
#[derive(Clone)]
pub struct HomeController {
    entities: AppEntities,
}

impl HomeController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Submit a greet call for `name`
    ///
    /// Empty input is coerced to the configured default name before the
    /// call is made; exactly one call is queued per submission.
    pub fn submit(&self, name: &str, cx: &mut App) {
        let default_name = &self.entities.config.read(cx).config.greet.default_name;
        let name = effective_name(name, default_name);

        let request_id = {
            let Some(hub) = cx.try_global::<ServiceHub>() else {
                return;
            };
            hub.log(AppEvent::info(format!("Greet requested for \"{name}\"")));
            hub.greet(name)
        };

        self.entities.greet.update(cx, |state, cx| {
            state.begin_request(request_id);
            cx.notify();
        });
    }
}

/// Name actually sent for a submission: the input, or the configured
/// default when the input is empty
fn effective_name(input: &str, default: &str) -> String {
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}
