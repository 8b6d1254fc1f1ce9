//! Platform detection from git remote URLs

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig};
use url::Url;

/// Split a remote URL into `(host, path)`.
///
/// Handles scheme URLs (`https://`, `ssh://`, `git://`) and scp-like
/// `user@host:owner/repo.git` remotes.
fn split_remote_url(url: &str) -> Option<(String, String)> {
    let url = url.trim();

    if let Ok(parsed) = Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        return Some((host.to_lowercase(), parsed.path().to_string()));
    }

    // scp-like syntax: [user@]host:path
    let (authority, path) = url.split_once(':')?;
    if authority.contains('/') || path.starts_with("//") {
        return None;
    }
    let host = authority.rsplit('@').next()?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_lowercase(), path.to_string()))
}

fn platform_for_host(host: &str) -> Option<Platform> {
    if host.contains("github") {
        Some(Platform::GitHub)
    } else if host.contains("gitlab") {
        Some(Platform::GitLab)
    } else {
        None
    }
}

/// Detect which platform a remote URL points at
pub fn detect_platform(url: &str) -> Option<Platform> {
    let (host, _) = split_remote_url(url)?;
    platform_for_host(&host)
}

/// Parse owner, repo and host out of a remote URL.
///
/// GitLab owners may be nested groups (`group/subgroup`); the repository is
/// always the last path segment.
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    let (host, path) =
        split_remote_url(url).ok_or_else(|| Error::NoSupportedRemotes(url.to_string()))?;

    let platform = platform_for_host(&host)
        .ok_or_else(|| Error::NoSupportedRemotes(format!("unknown platform for {url}")))?;

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let (owner, repo) = path
        .rsplit_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
        .ok_or_else(|| Error::NoSupportedRemotes(format!("cannot find owner/repo in {url}")))?;

    let default_host = match platform {
        Platform::GitHub => "github.com",
        Platform::GitLab => "gitlab.com",
    };

    Ok(PlatformConfig {
        platform,
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: (host != default_host).then_some(host),
    })
}
