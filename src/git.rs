//! Local git repository access
//!
//! Remotes are read with `gix`. Deletion shells out to `git push --delete`
//! so the user's configured credentials and hooks apply.

use crate::error::{Error, Result};
use crate::platform::BranchDeleter;
use crate::types::GitRemote;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// List the remotes of the repository containing `path`
pub fn git_remotes(path: &Path) -> Result<Vec<GitRemote>> {
    let repo = gix::discover(path)
        .map_err(|e| Error::Git(format!("not a git repository ({}): {e}", path.display())))?;

    let mut remotes = Vec::new();
    for name in repo.remote_names() {
        let name = name.to_string();
        let remote = repo
            .find_remote(name.as_str())
            .map_err(|e| Error::Git(format!("failed to read remote '{name}': {e}")))?;

        let Some(url) = remote
            .url(gix::remote::Direction::Push)
            .or_else(|| remote.url(gix::remote::Direction::Fetch))
        else {
            debug!(remote = %name, "remote has no URL, skipping");
            continue;
        };

        remotes.push(GitRemote {
            name,
            url: url.to_bstring().to_string(),
        });
    }

    Ok(remotes)
}

/// Pick the remote to operate on.
///
/// An explicitly requested remote must exist. Otherwise `origin` is
/// preferred, then the first remote.
pub fn select_remote(remotes: &[GitRemote], requested: Option<&str>) -> Result<String> {
    if let Some(name) = requested {
        return remotes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.name.clone())
            .ok_or_else(|| Error::RemoteNotFound(name.to_string()));
    }

    remotes
        .iter()
        .find(|r| r.name == "origin")
        .or_else(|| remotes.first())
        .map(|r| r.name.clone())
        .ok_or(Error::NoRemotes)
}

/// Deletes branches with `git push --delete <remote> <branch>`
#[derive(Debug, Clone)]
pub struct GitPushDeleter {
    repo_path: PathBuf,
    remote: String,
}

impl GitPushDeleter {
    /// Create a deleter that runs git inside `repo_path` against `remote`
    pub fn new(repo_path: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            remote: remote.into(),
        }
    }

    /// Remote branches are deleted from
    pub fn remote(&self) -> &str {
        &self.remote
    }
}

#[async_trait]
impl BranchDeleter for GitPushDeleter {
    async fn delete_branch(&self, branch: &str) -> Result<()> {
        debug!(remote = %self.remote, branch, "git push --delete");

        let output = Command::new("git")
            .args(["push", "--delete", &self.remote, branch])
            .current_dir(&self.repo_path)
            .output()
            .await
            .map_err(|e| Error::BranchDeletion {
                branch: branch.to_string(),
                message: format!("failed to run git: {e}"),
            })?;

        if !output.status.success() {
            return Err(Error::BranchDeletion {
                branch: branch.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Working tree root of the repository containing `path`.
///
/// Falls back to `path` itself for bare repositories.
pub fn repo_root(path: &Path) -> Result<PathBuf> {
    let repo = gix::discover(path)
        .map_err(|e| Error::Git(format!("not a git repository ({}): {e}", path.display())))?;
    Ok(repo
        .workdir()
        .map_or_else(|| path.to_path_buf(), Path::to_path_buf))
}
