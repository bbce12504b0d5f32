//! gitline CLI - git status segment for shell prompts.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{Cli, Commands, utils};

/// Environment variable holding the log filter, e.g. `GITLINE_LOG=debug`.
const LOG_ENV: &str = "GITLINE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = utils::load_config(cli.config.as_deref());
    utils::configure_color(&config, cli.no_color);

    let result = match cli.command {
        Commands::Prompt { path } => commands::prompt::run(&config, path),
        Commands::Filter { template, path } => commands::filter::run(&config, template, path),
        Commands::Status { json, path } => commands::status::run(&config, json, path),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
