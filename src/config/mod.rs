// ABOUTME: Configuration management for the macrolog engine
// ABOUTME: Environment-derived runtime settings for storage and persistence behavior

//! Configuration management

/// Environment-based runtime configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
