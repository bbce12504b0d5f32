//! Stash counting from the stash reflog.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::Result;

/// Location of the stash reflog relative to the git directory.
pub const STASH_LOG: &str = "logs/refs/stash";

/// Count newline-delimited entries in a stash reflog.
#[must_use]
pub fn count_entries(log: &str) -> usize {
    log.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Count stash entries recorded under `git_dir`.
///
/// A missing reflog means there are no stashes and yields `Ok(0)`.
///
/// # Errors
/// Returns error if the reflog exists but cannot be read.
pub fn stash_count(git_dir: &Path) -> Result<usize> {
    match fs::read_to_string(git_dir.join(STASH_LOG)) {
        Ok(content) => Ok(count_entries(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}
