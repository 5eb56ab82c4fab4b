//! CLI command implementations.

pub mod config;
pub mod health;
pub mod job;
pub mod profile;
pub mod stats;
