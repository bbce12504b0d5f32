//! Error types for gitline-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying a repository.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The git program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error("`git {command}` failed: {stderr}")]
    CommandFailed {
        /// Arguments passed to git, space-joined.
        command: String,
        /// Trimmed stderr of the failed invocation.
        stderr: String,
    },

    /// Located marker has no parent directory to use as a work tree.
    #[error("no work tree above {0}")]
    NoWorkTree(std::path::PathBuf),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
