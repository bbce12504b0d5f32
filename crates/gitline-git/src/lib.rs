//! # gitline-git
//!
//! Repository access for gitline: finding the enclosing repository and
//! asking it the read-only questions a prompt render needs, by running the
//! git executable and returning its text.

mod error;
pub mod locate;
mod repository;
pub mod stash;
mod traits;

pub use error::{Error, Result};
pub use locate::{RepoLocator, find_marker_dir};
pub use repository::Repository;
pub use traits::RepositoryQuery;
