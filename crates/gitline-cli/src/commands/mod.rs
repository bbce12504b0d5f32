//! Command definitions and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod completions;
pub mod filter;
pub mod prompt;
pub mod status;
pub mod utils;

/// gitline - git status segment for shell prompts.
#[derive(Debug, Parser)]
#[command(name = "gitline", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colour escape sequences.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the prompt segment for the current directory.
    Prompt {
        /// Start the repository search here instead of the current directory.
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Replace {git_enhanced} in a prompt template with the segment.
    Filter {
        /// Template text; read from stdin when omitted.
        #[arg(long)]
        template: Option<String>,

        /// Start the repository search here instead of the current directory.
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Show the parsed repository status.
    #[command(alias = "st")]
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Start the repository search here instead of the current directory.
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
