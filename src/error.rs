//! Error types for stack-prune
//!
//! Chain-level problems (gaps, inconsistent links, a failed deletion) are not
//! errors: they are reported per chain by [`crate::prune`]. This enum covers
//! failures that stop a command from running at all.

use thiserror::Error;

/// Errors that can occur in stack-prune
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API request failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API request failed
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Generic platform failure (also used by test doubles)
    #[error("platform error: {0}")]
    Platform(String),

    /// No usable credentials
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Local git repository could not be read
    #[error("git error: {0}")]
    Git(String),

    /// Requested remote does not exist
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// Repository has no remotes at all
    #[error("no git remotes configured")]
    NoRemotes,

    /// Remote URL does not point at a supported host
    #[error("no supported remote found: {0}")]
    NoSupportedRemotes(String),

    /// Settings file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// A single branch could not be removed from the remote
    #[error("failed to delete branch '{branch}': {message}")]
    BranchDeletion {
        /// Short branch name that was being deleted
        branch: String,
        /// Underlying failure
        message: String,
    },

    /// At least one chain stopped after a failed branch deletion
    #[error("{0} chain(s) stopped after a failed branch deletion")]
    IncompletePrune(usize),

    /// Unexpected failure (prompt I/O and the like)
    #[error("internal error: {0}")]
    Internal(String),

    /// Filesystem or process I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
