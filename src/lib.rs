//! Translate a short phrase into identifier candidates and let the user pick one.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
