//! `gitline prompt` command - print the prompt segment.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use gitline_core::Config;

use super::utils::{build_filter, start_dir};

/// Run the prompt command.
///
/// Prints nothing (not even a newline) outside a repository.
pub fn run(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let fragment = match start_dir(path) {
        Ok(cwd) => build_filter(config).fragment(&cwd),
        Err(e) => {
            tracing::debug!(error = %e, "no directory to search from");
            String::new()
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(fragment.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
