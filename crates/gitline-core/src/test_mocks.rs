//! Canned-text implementation of `RepositoryQuery` for unit tests.

use std::cell::Cell;

use gitline_git::{Error as GitError, RepositoryQuery, Result as GitResult};

/// Fake repository answering every query from fixed text.
///
/// A query set to `None` behaves like a git invocation that could not be
/// spawned.
pub struct FakeQuery {
    pub status: Option<String>,
    pub tag: Option<Option<String>>,
    pub short_hash: Option<Option<String>>,
    pub stash: Option<usize>,
    pub tag_calls: Cell<usize>,
    pub hash_calls: Cell<usize>,
}

impl Default for FakeQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeQuery {
    pub const fn new() -> Self {
        Self {
            status: Some(String::new()),
            tag: Some(None),
            short_hash: Some(None),
            stash: Some(0),
            tag_calls: Cell::new(0),
            hash_calls: Cell::new(0),
        }
    }

    pub fn with_status(mut self, text: &str) -> Self {
        self.status = Some(text.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(Some(tag.to_string()));
        self
    }

    pub fn with_short_hash(mut self, hash: &str) -> Self {
        self.short_hash = Some(Some(hash.to_string()));
        self
    }

    pub fn with_stash(mut self, count: usize) -> Self {
        self.stash = Some(count);
        self
    }

    /// Make every query fail as if git were missing.
    pub fn unavailable(mut self) -> Self {
        self.status = None;
        self.tag = None;
        self.short_hash = None;
        self.stash = None;
        self
    }
}

fn spawn_failure() -> GitError {
    GitError::Spawn {
        program: "git".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
}

impl RepositoryQuery for FakeQuery {
    fn status(&self) -> GitResult<String> {
        self.status.clone().ok_or_else(spawn_failure)
    }

    fn tag_at_head(&self) -> GitResult<Option<String>> {
        self.tag_calls.set(self.tag_calls.get() + 1);
        self.tag.clone().ok_or_else(spawn_failure)
    }

    fn short_hash(&self) -> GitResult<Option<String>> {
        self.hash_calls.set(self.hash_calls.get() + 1);
        self.short_hash.clone().ok_or_else(spawn_failure)
    }

    fn stash_count(&self) -> GitResult<usize> {
        self.stash.ok_or_else(spawn_failure)
    }
}
