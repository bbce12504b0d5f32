//! `gitline status` command - show the parsed repository status.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use gitline_core::{Config, Status};

use super::utils::{build_filter, start_dir};
use crate::output;

/// Run the status command.
pub fn run(config: &Config, json: bool, path: Option<PathBuf>) -> Result<()> {
    let cwd = start_dir(path)?;
    let status = build_filter(config).status(&cwd);

    if json {
        // `null` outside a repository keeps the output parseable.
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match status {
        Some(status) => print_status(&status),
        None => output::warn("Not inside a git repository (or HEAD cannot be named)"),
    }

    Ok(())
}

/// Print a human-readable summary.
fn print_status(status: &Status) {
    println!();
    let upstream = if status.remote().is_empty() {
        String::new()
    } else {
        format!(" → {}", status.remote().dimmed())
    };
    println!("  {}{upstream}", status.branch().bold());
    output::hr();

    output::detail(&count_line("ahead", status.ahead()));
    output::detail(&count_line("behind", status.behind()));
    output::detail(&count_line("staged", status.staged()));
    output::detail(&count_line("changed", status.changed()));
    output::detail(&count_line("conflicts", status.conflicts()));
    output::detail(&count_line("untracked", status.untracked()));
    output::detail(&count_line("stashed", status.stashed()));

    output::hr();
    if status.is_clean() {
        output::success("Working tree clean");
    } else {
        output::info("Working tree has changes");
    }
    println!();
}

fn count_line(label: &str, count: usize) -> String {
    let value = if count == 0 {
        count.to_string().dimmed().to_string()
    } else {
        count.to_string()
    };
    format!("  {label:<10} {value}")
}
