//! Prompt fragment rendering.
//!
//! Layout:
//!
//! ```text
//! (<branch>[ <divergence>]) [<status>]
//! ```
//!
//! The bracketed status section appears only when at least one of staged,
//! changed, conflicts, untracked or stashed is non-zero. Rendering is a pure
//! function of the [`Status`] and the renderer's palette and glyphs.

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Branch name when the work tree is clean.
    pub clean: Color,
    /// Branch name when anything is staged, changed, conflicted or untracked.
    pub dirty: Color,
    /// Status section.
    pub status: Color,
    /// Ahead/behind section.
    pub divergence: Color,
    /// Punctuation; `None` leaves it in the terminal's default colour.
    pub normal: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            clean: Color::Green,
            dirty: Color::Red,
            status: Color::Yellow,
            divergence: Color::Cyan,
            normal: None,
        }
    }
}

/// Symbols prefixed to each count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub ahead: String,
    pub behind: String,
    pub staged: String,
    pub conflicts: String,
    pub changed: String,
    pub untracked: String,
    pub stashed: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            ahead: "↑".into(),
            behind: "↓".into(),
            staged: "●".into(),
            conflicts: "✖".into(),
            changed: "✚".into(),
            untracked: "…".into(),
            stashed: "⌂".into(),
        }
    }
}

/// Renders a [`Status`] into a styled prompt fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    palette: Palette,
    glyphs: Glyphs,
}

impl Renderer {
    /// Create a renderer with a fixed palette and glyph table.
    #[must_use]
    pub const fn new(palette: Palette, glyphs: Glyphs) -> Self {
        Self { palette, glyphs }
    }

    /// Render the prompt fragment for `status`.
    #[must_use]
    pub fn render(&self, status: &Status) -> String {
        let branch_color = if status.is_clean() {
            self.palette.clean
        } else {
            self.palette.dirty
        };

        let mut out = self.normal("(");
        out.push_str(&status.branch().color(branch_color).to_string());

        let divergence = self.divergence_fragment(status);
        if !divergence.is_empty() {
            out.push_str(&self.normal(" "));
            out.push_str(&divergence.color(self.palette.divergence).to_string());
        }
        out.push_str(&self.normal(") "));

        let counts = self.status_fragment(status);
        if !counts.is_empty() {
            out.push_str(&self.normal("["));
            out.push_str(&counts.color(self.palette.status).to_string());
            out.push_str(&self.normal("] "));
        }

        out
    }

    /// Ahead/behind counts, e.g. `↑2 ↓1`; empty when in sync.
    #[must_use]
    pub fn divergence_fragment(&self, status: &Status) -> String {
        join_counts(&[
            (self.glyphs.ahead.as_str(), status.ahead()),
            (self.glyphs.behind.as_str(), status.behind()),
        ])
    }

    /// Non-zero file and stash counts in fixed order: staged, changed,
    /// conflicts, untracked, stashed.
    #[must_use]
    pub fn status_fragment(&self, status: &Status) -> String {
        join_counts(&[
            (self.glyphs.staged.as_str(), status.staged()),
            (self.glyphs.changed.as_str(), status.changed()),
            (self.glyphs.conflicts.as_str(), status.conflicts()),
            (self.glyphs.untracked.as_str(), status.untracked()),
            (self.glyphs.stashed.as_str(), status.stashed()),
        ])
    }

    fn normal(&self, text: &str) -> String {
        match self.palette.normal {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}

fn join_counts(entries: &[(&str, usize)]) -> String {
    entries
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(glyph, count)| format!("{glyph}{count}"))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
