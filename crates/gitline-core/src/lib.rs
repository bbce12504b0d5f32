//! # gitline-core
//!
//! Core library for gitline: the repository status model, parsing of git's
//! porcelain status stream, detached-HEAD labelling, and rendering of a
//! status into a coloured prompt fragment.

pub mod aggregate;
pub mod config;
mod error;
pub mod filter;
pub mod porcelain;
pub mod refs;
pub mod render;
pub mod status;

#[cfg(test)]
mod test_mocks;

pub use aggregate::StatusService;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{PLACEHOLDER, PromptFilter, substitute};
pub use render::{Glyphs, Palette, Renderer};
pub use status::{BranchHeader, FileCounts, Status};
