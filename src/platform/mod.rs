//! Platform services for GitHub and GitLab
//!
//! Provides a unified interface for reading closed PRs/MRs and deleting
//! branches across platforms.

mod detection;
mod factory;
mod github;
mod gitlab;

pub use detection::{detect_platform, parse_repo_info};
pub use factory::create_platform_service;
pub use github::GitHubService;
pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequestRef};
use async_trait::async_trait;

/// Removes a single branch from the shared remote.
///
/// Implementations receive the short branch name (no `owner:` prefix) and
/// return an error for any failure, including a branch that no longer
/// exists.
#[async_trait]
pub trait BranchDeleter: Send + Sync {
    /// Delete `branch` from the remote
    async fn delete_branch(&self, branch: &str) -> Result<()>;
}

/// Platform service trait for the closed PR feed
///
/// This trait abstracts GitHub and GitLab, allowing the same chain
/// detection to work with either platform. Every platform can also delete
/// branches through its API.
#[async_trait]
pub trait PlatformService: BranchDeleter {
    /// List every closed (including merged) PR/MR, oldest first.
    ///
    /// All pages are fetched; the order matters because a later PR claiming
    /// the same chain part replaces an earlier one.
    async fn list_closed_prs(&self) -> Result<Vec<PullRequestRef>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
