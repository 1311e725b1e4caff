// ABOUTME: Main library entry point for the macrolog nutrition tracking engine
// ABOUTME: Food catalog, meal diary, daily grading, achievements, and local persistence

#![deny(unsafe_code)]

//! # macrolog
//!
//! A local-first nutrition tracking engine: food database, meal composition,
//! a daily diary, water tracking, shopping lists, weekly planning, and
//! simple statistics with letter-grade scoring and achievement badges.
//!
//! All state lives in one in-memory snapshot and is persisted device-locally
//! through a narrow key-value storage abstraction. There is no server and no
//! sync protocol.
//!
//! ## Architecture
//!
//! - **Models**: plain data records for the nutrition domain
//! - **Intelligence**: pure computation - aggregation, grading, achievements
//! - **Storage plugins**: swappable blob-store backends (file, memory)
//! - **State**: the snapshot store with debounced persistence
//! - **Platform**: capability traits for notifications and scanning
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use macrolog::config::environment::AppConfig;
//! use macrolog::state::StateStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::in_memory();
//!     let store = StateStore::open(&config).await?;
//!
//!     let food = macrolog::models::FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9);
//!     store.upsert_food(food).await;
//!     store.flush().await;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition intelligence: aggregation, grading, achievements, statistics
pub mod intelligence;

/// Logging and structured output
pub mod logging;

/// Common data models for the nutrition domain
pub mod models;

/// Platform capability abstractions
pub mod platform;

/// Application state store with debounced persistence
pub mod state;

/// Storage abstraction layer with plugin support
pub mod storage_plugins;
