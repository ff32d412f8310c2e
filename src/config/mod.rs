//! Configuration module for oz-streamer.
//!
//! This module handles:
//! - Loading optional configuration from TOML files
//! - Defaults matching the stock OZ web client
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ApiConfig, Config, NavigationConfig, PlaybackConfig};
pub use validation::{validate_config, validate_credentials, validate_slug};
