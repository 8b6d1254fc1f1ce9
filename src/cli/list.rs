//! List command - show chains found among closed PRs

use crate::cli::context::CommandContext;
use crate::cli::render::print_assessments;
use crate::cli::style::Stylize;
use anstream::println;
use stack_prune::error::{Error, Result};
use stack_prune::prune::{ChainSummary, summarize};
use std::path::Path;

/// Run the list command
pub async fn run_list(path: &Path, remote: Option<&str>, json: bool) -> Result<()> {
    let ctx = CommandContext::new(path, remote, None).await?;
    let assessments = ctx.assess(&[]).await?;

    if json {
        let summaries: Vec<ChainSummary> = assessments.iter().map(summarize).collect();
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| Error::Internal(format!("failed to serialize chains: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    if assessments.is_empty() {
        println!("{}", "No chained PRs found among closed PRs.".muted());
        return Ok(());
    }

    print_assessments(&assessments);
    Ok(())
}
