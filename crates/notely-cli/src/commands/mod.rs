//! CLI command handlers

pub mod category;
pub mod config;
pub mod note;
pub mod seed;
pub mod status;
