//! Feature Pages

pub mod home;
