//! Configuration management for gitline.

use std::fs;
use std::path::Path;

use colored::Color;
use gitline_git::RepoLocator;
use gitline_git::locate::{DEFAULT_MARKER, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::{Glyphs, Palette, Renderer};

/// gitline configuration, usually loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Colour names for each palette entry.
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Glyph overrides.
    #[serde(default)]
    pub glyphs: Glyphs,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the repository locator described by `[general]`.
    #[must_use]
    pub fn locator(&self) -> RepoLocator {
        RepoLocator::new(&self.general.marker, self.general.max_depth)
    }

    /// Build the renderer described by `[palette]` and `[glyphs]`.
    ///
    /// # Errors
    /// Returns `InvalidColor` if a palette entry is not a known colour.
    pub fn renderer(&self) -> Result<Renderer> {
        Ok(Renderer::new(self.palette.resolve()?, self.glyphs.clone()))
    }
}

/// General gitline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory name that marks a repository root.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Maximum number of ancestors searched for the marker.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// git executable to run.
    #[serde(default = "default_git_program")]
    pub git_program: String,

    /// Emit colour escape sequences.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            max_depth: default_max_depth(),
            git_program: default_git_program(),
            color: default_color(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.into()
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_git_program() -> String {
    "git".into()
}

const fn default_color() -> bool {
    true
}

/// Colour names as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub clean: String,
    pub dirty: String,
    pub status: String,
    pub divergence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            clean: "green".into(),
            dirty: "red".into(),
            status: "yellow".into(),
            divergence: "cyan".into(),
            normal: None,
        }
    }
}

impl PaletteConfig {
    /// Parse every colour name into a [`Palette`].
    ///
    /// # Errors
    /// Returns `InvalidColor` naming the first entry that fails to parse.
    pub fn resolve(&self) -> Result<Palette> {
        Ok(Palette {
            clean: parse_color("clean", &self.clean)?,
            dirty: parse_color("dirty", &self.dirty)?,
            status: parse_color("status", &self.status)?,
            divergence: parse_color("divergence", &self.divergence)?,
            normal: self
                .normal
                .as_deref()
                .map(|name| parse_color("normal", name))
                .transpose()?,
        })
    }
}

fn parse_color(entry: &'static str, value: &str) -> Result<Color> {
    value.parse::<Color>().map_err(|()| Error::InvalidColor {
        entry,
        value: value.to_string(),
    })
}
