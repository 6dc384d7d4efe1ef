//! Home Feature
//!
//! The single page of the demo: greet form, greeting display, clock display.

pub mod controller;
pub mod page;
