//! Spinners shown while waiting on the network.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for a blocking network step.
///
/// Callers clear it before printing a menu, so it never overlaps input.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
