//! Prompt integration: locate, aggregate, render, substitute.

use std::ffi::OsString;
use std::path::Path;

use gitline_git::{RepoLocator, Repository, RepositoryQuery};

use crate::aggregate::StatusService;
use crate::config::Config;
use crate::error::Result;
use crate::render::Renderer;
use crate::status::Status;

/// Token in the host prompt template replaced by the rendered fragment.
pub const PLACEHOLDER: &str = "{git_enhanced}";

/// Replace every [`PLACEHOLDER`] in `template` with `fragment`.
#[must_use]
pub fn substitute(template: &str, fragment: &str) -> String {
    template.replace(PLACEHOLDER, fragment)
}

/// End-to-end prompt pipeline with its configuration fixed at construction.
#[derive(Debug, Clone)]
pub struct PromptFilter {
    locator: RepoLocator,
    renderer: Renderer,
    git_program: OsString,
}

impl PromptFilter {
    /// Create a filter from explicit parts.
    #[must_use]
    pub fn new(locator: RepoLocator, renderer: Renderer, git_program: impl Into<OsString>) -> Self {
        Self {
            locator,
            renderer,
            git_program: git_program.into(),
        }
    }

    /// Create a filter from configuration.
    ///
    /// # Errors
    /// Returns error if the palette names an unknown colour.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.locator(),
            config.renderer()?,
            &config.general.git_program,
        ))
    }

    /// Open the repository enclosing `cwd`, if any.
    ///
    /// # Errors
    /// Returns error if the located marker has no work tree above it.
    pub fn open(&self, cwd: &Path) -> Result<Option<Repository>> {
        let Some(git_dir) = self.locator.find_marker_dir(cwd) else {
            return Ok(None);
        };
        let repo = Repository::open(git_dir)?.with_program(&self.git_program);
        Ok(Some(repo))
    }

    /// Status of the repository enclosing `cwd`; `None` outside a
    /// repository or when the branch cannot be determined.
    #[must_use]
    pub fn status(&self, cwd: &Path) -> Option<Status> {
        match self.open(cwd) {
            Ok(Some(repo)) => StatusService::new(&repo).compute(),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "could not open repository");
                None
            }
        }
    }

    /// Rendered fragment for `cwd`, or an empty string.
    #[must_use]
    pub fn fragment(&self, cwd: &Path) -> String {
        self.status(cwd)
            .map(|status| self.renderer.render(&status))
            .unwrap_or_default()
    }

    /// Rendered fragment for an already-opened repository query.
    #[must_use]
    pub fn fragment_with<Q: RepositoryQuery + ?Sized>(&self, query: &Q) -> String {
        StatusService::new(query)
            .compute()
            .map(|status| self.renderer.render(&status))
            .unwrap_or_default()
    }

    /// `template` with the placeholder replaced by the fragment for `cwd`.
    #[must_use]
    pub fn apply(&self, template: &str, cwd: &Path) -> String {
        substitute(template, &self.fragment(cwd))
    }
}
