//! `gitline filter` command - substitute the segment into a prompt template.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use gitline_core::{Config, substitute};

use super::utils::{build_filter, start_dir};

/// Run the filter command.
pub fn run(config: &Config, template: Option<String>, path: Option<PathBuf>) -> Result<()> {
    let template = match template {
        Some(template) => template,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read template from stdin")?;
            buf
        }
    };

    let rendered = match start_dir(path) {
        Ok(cwd) => build_filter(config).apply(&template, &cwd),
        Err(e) => {
            tracing::debug!(error = %e, "no directory to search from");
            substitute(&template, "")
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
