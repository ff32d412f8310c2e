//! OZ Streamer - browse OZ channels and record streams with streamlink.
//!
//! This library provides the pieces behind the `oz-streamer` binary.
//!
//! # Features
//!
//! - Password-grant login with automatic token renewal
//! - Channel, collection and video listings
//! - Catalog walk to any depth until a playable item is chosen
//! - Stream descriptor resolution and playback cookie exchange
//! - streamlink command construction and dispatch
//!
//! # Example
//!
//! ```no_run
//! use oz_streamer::{Config, Credentials, OzApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = OzApi::new(config.api.clone(), Credentials::new("user", "secret"))?;
//!
//!     for channel in api.organization_channels().await? {
//!         println!("{} {}", channel.id, channel.display_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod media;
pub mod navigate;
pub mod output;
pub mod playback;

// Re-exports for convenience
pub use api::{Credentials, OzApi, Session, SessionManager};
pub use config::Config;
pub use error::{Error, Result};
pub use media::{CollectionNode, CookieGrant, ResolvedStream};
pub use navigate::{Navigation, Navigator, StartPoint};
pub use playback::PlayerCommand;
