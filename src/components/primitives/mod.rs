//! Primitive Components

pub mod button;
pub mod text_input;
