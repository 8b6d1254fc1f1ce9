//! Auth command - check that credentials can be found and used

use crate::cli::style::{Stylize, check};
use anstream::println;
use stack_prune::auth::{get_github_auth, get_gitlab_auth, test_github_auth, test_gitlab_auth};
use stack_prune::error::Result;
use stack_prune::types::Platform;

/// Run the auth check for one platform
pub async fn run_auth(platform: Platform, host: Option<&str>) -> Result<()> {
    let (source, login) = match platform {
        Platform::GitHub => {
            let auth = get_github_auth(host).await?;
            (auth.source, test_github_auth(&auth).await?)
        }
        Platform::GitLab => {
            let auth = get_gitlab_auth(host).await?;
            (auth.source, test_gitlab_auth(&auth).await?)
        }
    };

    println!(
        "{} {platform}: authenticated as {} (token from {})",
        check(),
        login.accent(),
        source.to_string().muted()
    );
    Ok(())
}
