//! Greet GUI Client Library
//!
//! This crate provides the main application logic for the Greet GUI client,
//! a native desktop demo that submits a name to a greeting backend and
//! displays a backend-pushed clock.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
