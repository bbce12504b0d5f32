//! Error types for gitline-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitline-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A palette entry names a colour `colored` does not know.
    #[error("invalid color '{value}' for palette entry '{entry}'")]
    InvalidColor {
        /// Palette entry being configured.
        entry: &'static str,
        /// The rejected colour name.
        value: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Git operation error.
    #[error("git error: {0}")]
    Git(#[from] gitline_git::Error),
}
