//! Filesystem module.
//!
//! Provides:
//! - Output path management
//! - Filename sanitization

pub mod naming;
pub mod paths;

pub use naming::{make_unique_filename, sanitize_component, sanitize_filename};
pub use paths::{ensure_dir, get_output_path};
