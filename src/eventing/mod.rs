//! Eventing Layer
//!
//! Events flowing from the service layer to the UI.

pub mod app_event;
