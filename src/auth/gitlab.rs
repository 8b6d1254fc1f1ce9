//! GitLab authentication

use super::{AuthSource, token_from_cli, token_from_vars};
use crate::error::{Error, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

/// Environment variables checked for a GitLab token, in order
const TOKEN_VARS: &[&str] = &["GITLAB_TOKEN", "GL_TOKEN"];

/// GitLab credentials
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Personal access token
    pub token: SecretString,
    /// Where the token came from
    pub source: AuthSource,
    /// Host the token belongs to
    pub host: String,
}

/// Find a GitLab token.
///
/// Checks `GITLAB_TOKEN` then `GL_TOKEN`, then falls back to
/// `glab config get token --host <host>`.
pub async fn get_gitlab_auth(host: Option<&str>) -> Result<GitLabAuthConfig> {
    let host = host.unwrap_or("gitlab.com").to_string();

    if let Some(token) = token_from_vars(TOKEN_VARS, |var| std::env::var(var).ok()) {
        debug!("using GitLab token from environment");
        return Ok(GitLabAuthConfig {
            token: SecretString::from(token),
            source: AuthSource::EnvVar,
            host,
        });
    }

    let token = token_from_cli("glab", &["config", "get", "token", "--host", &host])
        .await
        .ok_or_else(|| {
            Error::Auth(
                "no GitLab token found. Set GITLAB_TOKEN or GL_TOKEN, or run 'glab auth login'"
                    .to_string(),
            )
        })?;

    debug!("using GitLab token from glab CLI");
    Ok(GitLabAuthConfig {
        token: SecretString::from(token),
        source: AuthSource::Cli,
        host,
    })
}

/// Verify the token by fetching the current user; returns the username
pub async fn test_gitlab_auth(config: &GitLabAuthConfig) -> Result<String> {
    #[derive(Deserialize)]
    struct User {
        username: String,
    }

    let url = format!("https://{}/api/v4/user", config.host);
    let user: User = Client::new()
        .get(&url)
        .header("PRIVATE-TOKEN", config.token.expose_secret())
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Auth(format!("GitLab rejected the token: {e}")))?
        .json()
        .await?;

    Ok(user.username)
}
