//! Trait abstractions for repository queries.
//!
//! This module defines the `RepositoryQuery` trait which abstracts the
//! read-only questions a prompt render asks of a repository, enabling
//! dependency injection and testability.

use crate::Result;

/// Trait for the read-only queries behind a prompt render.
///
/// This trait abstracts the git subprocess, allowing for:
/// - Canned-text fakes in tests
/// - Alternative backends that never spawn a process
///
/// Every method is synchronous and blocking; a render calls them one after
/// another and never concurrently.
#[allow(clippy::missing_errors_doc)]
pub trait RepositoryQuery {
    /// Porcelain status text, including the `##` branch header and every
    /// untracked file.
    fn status(&self) -> Result<String>;

    /// Name of a tag pointing exactly at HEAD, if any.
    fn tag_at_head(&self) -> Result<Option<String>>;

    /// Abbreviated hash of HEAD, if HEAD resolves to a commit.
    fn short_hash(&self) -> Result<Option<String>>;

    /// Number of entries in the stash reflog.
    fn stash_count(&self) -> Result<usize>;
}

impl<T: RepositoryQuery + ?Sized> RepositoryQuery for &T {
    fn status(&self) -> Result<String> {
        (**self).status()
    }

    fn tag_at_head(&self) -> Result<Option<String>> {
        (**self).tag_at_head()
    }

    fn short_hash(&self) -> Result<Option<String>> {
        (**self).short_hash()
    }

    fn stash_count(&self) -> Result<usize> {
        (**self).stash_count()
    }
}
