//! Domain Types

pub mod config;
