//! Status aggregation from repository queries.
//!
//! Combines the porcelain parse, detached-HEAD resolution and stash count
//! into one [`Status`]. Query failures never escape: they degrade to empty
//! output or zero counts.

use gitline_git::RepositoryQuery;

use crate::porcelain;
use crate::refs;
use crate::status::Status;

/// Service computing a [`Status`] with a trait-based query dependency.
pub struct StatusService<'a, Q: RepositoryQuery + ?Sized> {
    query: &'a Q,
}

impl<'a, Q: RepositoryQuery + ?Sized> StatusService<'a, Q> {
    /// Create a new status service.
    pub const fn new(query: &'a Q) -> Self {
        Self { query }
    }

    /// Compute the status of the repository.
    ///
    /// Returns `None` when there is nothing to show: the branch could not
    /// be determined, including a detached HEAD with neither tag nor hash.
    pub fn compute(&self) -> Option<Status> {
        let text = self.query.status().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "status query failed");
            String::new()
        });
        let mut parsed = porcelain::parse(&text);

        if parsed.header.detached {
            parsed.header.branch = refs::resolve_detached(self.query).unwrap_or_default();
        }

        if parsed.header.branch.is_empty() {
            tracing::debug!("no branch to display");
            return None;
        }

        let stashed = self.query.stash_count().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "stash count failed");
            0
        });

        Some(Status::new(parsed.header, parsed.counts, stashed))
    }
}
