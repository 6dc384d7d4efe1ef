//! Layout Components

pub mod header;
pub mod log_panel;
