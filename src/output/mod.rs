//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output and numbered menus
//! - Spinners for network waits

pub mod console;
pub mod progress;

pub use self::console::{
    print_banner, print_error, print_info, print_menu, print_prompt, print_stream_summary,
    print_success, print_warning,
};
pub use progress::create_spinner;
