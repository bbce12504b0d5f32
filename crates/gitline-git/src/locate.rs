//! Repository discovery by walking up the directory tree.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Marker directory that identifies a git repository.
pub const DEFAULT_MARKER: &str = ".git";

/// Upper bound on the number of ancestors visited in one search.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Finds the nearest ancestor directory containing a marker directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocator {
    marker: OsString,
    max_depth: usize,
}

impl Default for RepoLocator {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_MAX_DEPTH)
    }
}

impl RepoLocator {
    /// Create a locator for `marker`, visiting at most `max_depth` ancestors
    /// above the starting directory.
    #[must_use]
    pub fn new(marker: impl AsRef<OsStr>, max_depth: usize) -> Self {
        Self {
            marker: marker.as_ref().to_os_string(),
            max_depth,
        }
    }

    /// Name of the marker directory this locator looks for.
    #[must_use]
    pub fn marker(&self) -> &OsStr {
        &self.marker
    }

    /// Return `<ancestor>/<marker>` for the nearest ancestor of `start`
    /// (including `start` itself) that contains the marker as a directory.
    ///
    /// A relative `start` is resolved against the current directory first.
    ///
    /// Returns `None` when no ancestor up to the filesystem root qualifies,
    /// or when the depth bound is exhausted first.
    #[must_use]
    pub fn find_marker_dir(&self, start: &Path) -> Option<PathBuf> {
        let absolute = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
        let mut current = absolute.as_path();

        for _ in 0..=self.max_depth {
            let candidate = current.join(&self.marker);
            tracing::trace!(candidate = %candidate.display(), "probing for marker");
            if candidate.is_dir() {
                return Some(candidate);
            }

            match current.parent() {
                // Path::parent only ever yields a strictly shorter path.
                Some(parent) if parent != current && !parent.as_os_str().is_empty() => {
                    current = parent;
                }
                _ => return None,
            }
        }

        tracing::debug!(start = %start.display(), max_depth = self.max_depth, "marker search exceeded depth bound");
        None
    }
}

/// Convenience wrapper for [`RepoLocator::find_marker_dir`] with the default
/// depth bound.
#[must_use]
pub fn find_marker_dir(start: &Path, marker: &str) -> Option<PathBuf> {
    RepoLocator::new(marker, DEFAULT_MAX_DEPTH).find_marker_dir(start)
}
