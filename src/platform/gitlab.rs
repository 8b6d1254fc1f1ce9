//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::{BranchDeleter, PlatformService};
use crate::types::{Platform, PlatformConfig, PullRequestRef};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size for the MR listing (GitLab maximum)
const PER_PAGE: usize = 100;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: SecretString,
    api_base: String,
    config: PlatformConfig,
    project_path: String,
}

#[derive(Deserialize)]
struct MergeRequest {
    iid: u64,
    title: String,
    state: String, // "opened", "closed", "locked", "merged"
    web_url: String,
    source_branch: String,
    target_branch: String,
    created_at: Option<DateTime<Utc>>,
}

impl MergeRequest {
    fn is_closed(&self) -> bool {
        matches!(self.state.as_str(), "closed" | "merged")
    }
}

impl From<MergeRequest> for PullRequestRef {
    fn from(mr: MergeRequest) -> Self {
        Self {
            number: mr.iid,
            title: mr.title,
            head_label: mr.source_branch,
            base_label: mr.target_branch,
            html_url: mr.web_url,
            created_at: mr.created_at,
        }
    }
}

impl GitLabService {
    /// Create a new GitLab service
    pub fn new(token: SecretString, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let host = host.unwrap_or_else(|| "gitlab.com".to_string());
        let project_path = format!("{owner}/{repo}");

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        let config_host = if host == "gitlab.com" {
            None
        } else {
            Some(host.clone())
        };

        Ok(Self {
            client,
            token,
            api_base: format!("https://{host}/api/v4"),
            config: PlatformConfig {
                platform: Platform::GitLab,
                owner,
                repo,
                host: config_host,
            },
            project_path,
        })
    }

    /// Point the service at a different API root (e.g. `http://localhost:8080/api/v4`)
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_path).into_owned()
    }
}

#[async_trait]
impl BranchDeleter for GitLabService {
    async fn delete_branch(&self, branch: &str) -> Result<()> {
        debug!(branch, "deleting branch via GitLab API");
        let url = self.api_url(&format!(
            "/projects/{}/repository/branches/{}",
            self.encoded_project(),
            urlencoding::encode(branch)
        ));

        self.client
            .delete(&url)
            .header("PRIVATE-TOKEN", self.token.expose_secret())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::BranchDeletion {
                branch: branch.to_string(),
                message: e.to_string(),
            })?;

        debug!(branch, "deleted branch");
        Ok(())
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequestRef>> {
        debug!(project = %self.project_path, "listing closed MRs");
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));
        let per_page = PER_PAGE.to_string();

        let mut result = Vec::new();
        let mut page = 1_u32;
        loop {
            let page_param = page.to_string();
            let mrs: Vec<MergeRequest> = self
                .client
                .get(&url)
                .header("PRIVATE-TOKEN", self.token.expose_secret())
                .query(&[
                    ("state", "all"),
                    ("order_by", "created_at"),
                    ("sort", "asc"),
                    ("per_page", per_page.as_str()),
                    ("page", page_param.as_str()),
                ])
                .send()
                .await?
                .error_for_status()
                .map_err(|e| Error::GitLabApi(e.to_string()))?
                .json()
                .await?;

            let fetched = mrs.len();
            result.extend(mrs.into_iter().filter(MergeRequest::is_closed).map(Into::into));
            debug!(page, fetched, "fetched MR page");

            if fetched < PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!(count = result.len(), "listed closed MRs");
        Ok(result)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
