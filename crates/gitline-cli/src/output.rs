//! Terminal output formatting utilities.
//!
//! Diagnostics go to stderr so they never end up inside a captured prompt.

use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", "→".blue(), msg);
}

/// Print a detail line without prefix.
pub fn detail(msg: &str) {
    println!("{msg}");
}

/// Print a horizontal line.
pub fn hr() {
    println!("{}", rule(40));
}

fn rule(width: usize) -> String {
    "─".repeat(width).dimmed().to_string()
}
