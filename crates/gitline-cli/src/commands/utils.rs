use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gitline_core::{Config, Palette, PromptFilter, Renderer};

use crate::output;

/// Default config location: `<config_dir>/gitline/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitline").join("config.toml"))
}

/// Load the config, falling back to defaults (with a warning) on error.
///
/// A broken config must never take the prompt down with it.
pub fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return Config::default();
    };

    Config::load(&path).unwrap_or_else(|e| {
        output::warn(&format!("ignoring {}: {e}", path.display()));
        Config::default()
    })
}

/// Build the prompt filter, falling back to the default palette when the
/// configured one is invalid.
pub fn build_filter(config: &Config) -> PromptFilter {
    PromptFilter::from_config(config).unwrap_or_else(|e| {
        output::warn(&format!("{e}; using default colors"));
        PromptFilter::new(
            config.locator(),
            Renderer::new(Palette::default(), config.glyphs.clone()),
            &config.general.git_program,
        )
    })
}

/// Turn colour output on or off for the rest of the process.
///
/// Prompt output is captured by the shell rather than written to a
/// terminal, so colour is forced on unless disabled explicitly.
pub fn configure_color(config: &Config, no_color: bool) {
    let enabled = config.general.color && !no_color && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(enabled);
}

/// Directory to start the repository search from.
pub fn start_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Cannot determine current directory"),
    }
}
