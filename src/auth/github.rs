//! GitHub authentication

use super::{AuthSource, token_from_cli, token_from_vars};
use crate::error::{Error, Result};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Environment variables checked for a GitHub token, in order
const TOKEN_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// GitHub credentials
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: SecretString,
    /// Where the token came from
    pub source: AuthSource,
    /// Enterprise host, `None` for github.com
    pub host: Option<String>,
}

/// Find a GitHub token.
///
/// Checks `GH_TOKEN` then `GITHUB_TOKEN`, then falls back to
/// `gh auth token`.
pub async fn get_github_auth(host: Option<&str>) -> Result<GitHubAuthConfig> {
    if let Some(token) = token_from_vars(TOKEN_VARS, |var| std::env::var(var).ok()) {
        debug!("using GitHub token from environment");
        return Ok(GitHubAuthConfig {
            token: SecretString::from(token),
            source: AuthSource::EnvVar,
            host: host.map(ToString::to_string),
        });
    }

    let mut args = vec!["auth", "token"];
    if let Some(h) = host {
        args.extend(["--hostname", h]);
    }

    let token = token_from_cli("gh", &args).await.ok_or_else(|| {
        Error::Auth(
            "no GitHub token found. Set GH_TOKEN or GITHUB_TOKEN, or run 'gh auth login'"
                .to_string(),
        )
    })?;

    debug!("using GitHub token from gh CLI");
    Ok(GitHubAuthConfig {
        token: SecretString::from(token),
        source: AuthSource::Cli,
        host: host.map(ToString::to_string),
    })
}

/// Verify the token by fetching the authenticated user; returns the login
pub async fn test_github_auth(config: &GitHubAuthConfig) -> Result<String> {
    let mut builder = Octocrab::builder().personal_token(config.token.expose_secret().to_string());

    if let Some(ref h) = config.host {
        builder = builder
            .base_uri(format!("https://{h}/api/v3"))
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }

    let client = builder
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = client
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("GitHub rejected the token: {e}")))?;

    Ok(user.login)
}
