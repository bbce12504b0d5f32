//! Human-readable labels for a detached HEAD.

use gitline_git::RepositoryQuery;

/// Prefix distinguishing an abbreviated hash from a branch or tag name.
pub const HASH_PREFIX: char = ':';

/// Label a detached HEAD: the exact tag at HEAD if there is one, otherwise
/// the abbreviated hash prefixed with [`HASH_PREFIX`].
///
/// Returns `None` when neither query has an answer (e.g. unborn HEAD).
/// Query failures are treated like empty answers.
pub fn resolve_detached<Q: RepositoryQuery + ?Sized>(query: &Q) -> Option<String> {
    let tag = query.tag_at_head().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "tag query failed");
        None
    });
    if let Some(tag) = tag.filter(|t| !t.is_empty()) {
        return Some(tag);
    }

    let hash = query.short_hash().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "short hash query failed");
        None
    });
    hash.filter(|h| !h.is_empty())
        .map(|h| format!("{HASH_PREFIX}{h}"))
}
