//! Console output utilities.

use std::io::Write;

use console::style;

use crate::media::{CookieGrant, ResolvedStream};

/// Separator printed above every menu.
const MENU_RULE: &str = "*************************";

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     OZ Streamer                                       ║
║     Browse OZ channels, record with streamlink        ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print a numbered menu.
pub fn print_menu(heading: &str, options: &[String]) {
    println!("{}", style(MENU_RULE).dim());
    println!("{}", style(heading).bold());
    for (i, option) in options.iter().enumerate() {
        println!("[{}] {}", style(i).cyan(), option);
    }
}

/// Print an input prompt without a trailing newline.
pub fn print_prompt(label: &str) {
    print!("{}: ", style(label).bold());
    let _ = std::io::stdout().flush();
}

/// Print what is about to be handed to the player.
pub fn print_stream_summary(filename: &str, stream: &ResolvedStream) {
    println!();
    println!("{}", style("Stream:").bold());
    println!("  URL:    {}", stream.url);
    match &stream.cookie {
        CookieGrant::Issued(cookie) => println!("  Cookie: {} (issued)", cookie.name),
        CookieGrant::NotOffered => println!("  Cookie: none"),
        CookieGrant::Unavailable(reason) => {
            println!("  Cookie: {} ({})", style("unavailable").yellow(), reason)
        }
    }
    println!("  File:   {}", filename);
    println!();
}
