//! Status model for a single prompt render.
//!
//! A [`Status`] is built fresh for every render and never mutated afterwards;
//! the repository may change between any two prompts.

use serde::Serialize;

/// Branch information parsed from the `##` header line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchHeader {
    /// Local branch name; empty when HEAD is detached.
    pub branch: String,
    /// Upstream tracking ref, empty if none.
    pub remote: String,
    /// Commits on the local branch not on the upstream.
    pub ahead: usize,
    /// Commits on the upstream not on the local branch.
    pub behind: usize,
    /// Header reported `no branch`.
    #[serde(skip)]
    pub detached: bool,
}

/// Per-bucket file counts accumulated from porcelain file lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub staged: usize,
    pub changed: usize,
    pub conflicts: usize,
    pub untracked: usize,
}

impl FileCounts {
    /// No staged, changed, conflicted or untracked files.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.staged == 0 && self.changed == 0 && self.conflicts == 0 && self.untracked == 0
    }
}

/// Complete repository status for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    branch: String,
    remote: String,
    clean: bool,
    ahead: usize,
    behind: usize,
    untracked: usize,
    changed: usize,
    conflicts: usize,
    staged: usize,
    stashed: usize,
}

impl Status {
    /// Assemble a status; `clean` is derived from `counts` and ignores the
    /// stash.
    #[must_use]
    pub fn new(header: BranchHeader, counts: FileCounts, stashed: usize) -> Self {
        Self {
            branch: header.branch,
            remote: header.remote,
            clean: counts.is_clean(),
            ahead: header.ahead,
            behind: header.behind,
            untracked: counts.untracked,
            changed: counts.changed,
            conflicts: counts.conflicts,
            staged: counts.staged,
            stashed,
        }
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.clean
    }

    #[must_use]
    pub const fn ahead(&self) -> usize {
        self.ahead
    }

    #[must_use]
    pub const fn behind(&self) -> usize {
        self.behind
    }

    #[must_use]
    pub const fn untracked(&self) -> usize {
        self.untracked
    }

    #[must_use]
    pub const fn changed(&self) -> usize {
        self.changed
    }

    #[must_use]
    pub const fn conflicts(&self) -> usize {
        self.conflicts
    }

    #[must_use]
    pub const fn staged(&self) -> usize {
        self.staged
    }

    #[must_use]
    pub const fn stashed(&self) -> usize {
        self.stashed
    }
}
