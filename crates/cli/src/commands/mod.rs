//! CLI command handlers

pub mod calculate;
pub mod request;
