//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by the prune and list commands.

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use stack_prune::chain::build_chains;
use stack_prune::config::{DeleteVia, Settings, load_settings};
use stack_prune::error::{Error, Result};
use stack_prune::git::{GitPushDeleter, git_remotes, repo_root, select_remote};
use stack_prune::platform::{BranchDeleter, PlatformService, create_platform_service, parse_repo_info};
use stack_prune::prune::{ChainAssessment, assess_chains};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Shared context for CLI commands that interact with the platform
///
/// This struct encapsulates the common setup:
/// - Locating the repository root and loading settings
/// - Selecting and validating the remote
/// - Detecting the platform and creating the service
/// - Choosing how branches get deleted
pub struct CommandContext {
    /// Effective settings (files + flags)
    pub settings: Settings,
    /// Platform service (GitHub/GitLab)
    pub platform: Box<dyn PlatformService>,
    /// Selected remote name
    pub remote_name: String,
    /// Set when deleting through `git push --delete`
    git_deleter: Option<GitPushDeleter>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// `remote` and `via` are command-line overrides of the settings files.
    pub async fn new(path: &Path, remote: Option<&str>, via: Option<DeleteVia>) -> Result<Self> {
        let repo_root = repo_root(path)?;

        let mut settings = load_settings(&repo_root)?;
        if let Some(via) = via {
            settings.delete_via = via;
        }

        // Get remotes and select one
        let remotes = git_remotes(&repo_root)?;
        let requested = remote.or(settings.remote.as_deref());
        let remote_name = select_remote(&remotes, requested)?;

        // Detect platform from remote URL
        let remote_info = remotes
            .iter()
            .find(|r| r.name == remote_name)
            .ok_or_else(|| Error::RemoteNotFound(remote_name.clone()))?;

        let platform_config = parse_repo_info(&remote_info.url)?;
        let platform = create_platform_service(&platform_config).await?;

        let git_deleter = (settings.delete_via == DeleteVia::Git)
            .then(|| GitPushDeleter::new(&repo_root, &remote_name));

        Ok(Self {
            settings,
            platform,
            remote_name,
            git_deleter,
        })
    }

    /// The branch deleter selected by settings
    pub fn deleter(&self) -> &dyn BranchDeleter {
        match &self.git_deleter {
            Some(git) => git,
            None => self.platform.as_ref(),
        }
    }

    /// Fetch closed PRs, build chains and assess them.
    ///
    /// A non-empty `only` keeps just the named chains.
    pub async fn assess(&self, only: &[String]) -> Result<Vec<ChainAssessment>> {
        let config = self.platform.config();
        let repo = format!("{}/{}", config.owner, config.repo);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!("Fetching closed PRs from {}...", repo.emphasis()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let prs = match self.platform.list_closed_prs().await {
            Ok(prs) => prs,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };

        spinner.finish_with_message(format!(
            "{} Fetched {} closed PR(s) from {}",
            check(),
            prs.len(),
            repo.emphasis()
        ));

        let mut chains = build_chains(&prs);

        if !only.is_empty() {
            for name in only {
                if !chains.keys().any(|k| k.as_str() == name.as_str()) {
                    warn!(chain = %name, "requested chain not found among closed PRs");
                    println!("{}", format!("No chain named '{name}' found").warn());
                }
            }
            chains.retain(|name, _| only.iter().any(|o| o == name.as_str()));
        }

        Ok(assess_chains(chains, self.settings.duplicate_parts))
    }
}
