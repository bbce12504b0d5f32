//! Shell completion generation.

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use super::Cli;

/// Generate shell completions and print to stdout.
pub fn run(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout().lock())
}

fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gitline", out);
    out.flush()?;
    Ok(())
}
