//! Repository handle that answers queries by running the git executable.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::stash;
use crate::traits::RepositoryQuery;

/// Arguments for the porcelain status query.
const STATUS_ARGS: &[&str] = &["status", "--porcelain", "--branch", "--untracked-files=all"];

/// Arguments for the exact-tag query.
const TAG_ARGS: &[&str] = &["describe", "--tags", "--exact-match", "HEAD"];

/// Arguments for the abbreviated-hash query.
const SHORT_HASH_ARGS: &[&str] = &["rev-parse", "--short", "HEAD"];

/// A located repository, queried through the git executable.
pub struct Repository {
    git_dir: PathBuf,
    workdir: PathBuf,
    program: OsString,
}

impl Repository {
    /// Open the repository whose marker directory is `git_dir`.
    ///
    /// The work tree is the directory containing `git_dir`.
    ///
    /// # Errors
    /// Returns error if `git_dir` has no parent directory.
    pub fn open(git_dir: impl Into<PathBuf>) -> Result<Self> {
        let git_dir = git_dir.into();
        let workdir = git_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::NoWorkTree(git_dir.clone()))?
            .to_path_buf();

        Ok(Self {
            git_dir,
            workdir,
            program: OsString::from("git"),
        })
    }

    /// Use `program` instead of `git` from `PATH`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Run git with `args` in the work tree and return its stdout.
    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            // Status refreshes must not take index.lock from under the user.
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a query whose unsuccessful exit means "no answer" rather than
    /// an error, returning the first trimmed line of stdout.
    fn git_optional(&self, args: &[&str]) -> Result<Option<String>> {
        match self.git(args) {
            Ok(stdout) => Ok(first_line(&stdout)),
            Err(Error::CommandFailed { command, stderr }) => {
                tracing::trace!(%command, %stderr, "query had no answer");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl RepositoryQuery for Repository {
    fn status(&self) -> Result<String> {
        self.git(STATUS_ARGS)
    }

    fn tag_at_head(&self) -> Result<Option<String>> {
        self.git_optional(TAG_ARGS)
    }

    fn short_hash(&self) -> Result<Option<String>> {
        self.git_optional(SHORT_HASH_ARGS)
    }

    fn stash_count(&self) -> Result<usize> {
        stash::stash_count(&self.git_dir)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish_non_exhaustive()
    }
}

fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
}
