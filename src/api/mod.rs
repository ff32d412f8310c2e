//! OZ API module.
//!
//! This module provides:
//! - Password-grant authentication and token renewal
//! - HTTP client for the OZ REST API
//! - Channel and collection listings
//! - Stream descriptor resolution and cookie exchange
//! - API response types

pub mod catalog;
pub mod client;
pub mod session;
pub mod stream;
pub mod types;

pub use client::OzApi;
pub use session::{Credentials, Session, SessionManager};
pub use types::*;
