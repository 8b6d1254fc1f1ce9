//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{BranchDeleter, PlatformService};
use crate::types::{Platform, PlatformConfig, PullRequestRef};
use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::params::repos::Reference;
use octocrab::params::{Direction, State, pulls::Sort};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Page size for the closed PR listing (GitHub maximum)
const PER_PAGE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// Enterprise hosts are reached through `https://<host>/api/v3`.
    pub fn new(
        token: &SecretString,
        owner: String,
        repo: String,
        host: Option<String>,
    ) -> Result<Self> {
        let api_base = host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, api_base.as_deref(), owner, repo, host)
    }

    /// Create a service talking to an explicit API root (e.g. `http://localhost:8080`)
    pub fn with_api_base(
        token: &SecretString,
        api_base: &str,
        owner: String,
        repo: String,
    ) -> Result<Self> {
        Self::build(token, Some(api_base), owner, repo, None)
    }

    fn build(
        token: &SecretString,
        api_base: Option<&str>,
        owner: String,
        repo: String,
        host: Option<String>,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.expose_secret().to_string());

        if let Some(base) = api_base {
            builder = builder
                .base_uri(base)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
        })
    }
}

/// Helper to convert an octocrab PR to our `PullRequestRef` type.
///
/// Labels fall back to the bare ref name when GitHub omits them (deleted
/// fork repositories).
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequestRef {
    PullRequestRef {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        head_label: pr
            .head
            .label
            .clone()
            .unwrap_or_else(|| pr.head.ref_field.clone()),
        base_label: pr
            .base
            .label
            .clone()
            .unwrap_or_else(|| pr.base.ref_field.clone()),
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        created_at: pr.created_at,
    }
}

#[async_trait]
impl BranchDeleter for GitHubService {
    async fn delete_branch(&self, branch: &str) -> Result<()> {
        debug!(branch, "deleting branch via GitHub API");
        self.client
            .repos(&self.config.owner, &self.config.repo)
            .delete_ref(&Reference::Branch(branch.to_string()))
            .await
            .map_err(|e| Error::BranchDeletion {
                branch: branch.to_string(),
                message: e.to_string(),
            })?;
        debug!(branch, "deleted branch");
        Ok(())
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequestRef>> {
        debug!(owner = %self.config.owner, repo = %self.config.repo, "listing closed PRs");

        let first_page = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(State::Closed)
            .sort(Sort::Created)
            .direction(Direction::Ascending)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let prs = self.client.all_pages(first_page).await?;

        let result: Vec<PullRequestRef> = prs.iter().map(pr_from_octocrab).collect();
        debug!(count = result.len(), "listed closed PRs");
        Ok(result)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
