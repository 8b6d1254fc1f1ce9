//! Prune command - delete the branches of finished chains

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::render::{print_assessments, print_ready_chain, print_summary};
use crate::cli::style::Stylize;
use anstream::println;
use dialoguer::Confirm;
use stack_prune::config::DeleteVia;
use stack_prune::error::{Error, Result};
use stack_prune::prune::{AutoConfirm, ConfirmationGate, DeletionOrder, Outcome, prune_chains};
use stack_prune::types::ChainName;
use std::path::Path;

/// Options for the prune command
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Dry run - show what would be deleted without making changes
    pub dry_run: bool,
    /// Skip the per-chain confirmation prompt
    pub yes: bool,
    /// Only process these chains
    pub chains: Vec<String>,
    /// Override the deletion mechanism
    pub via: Option<DeleteVia>,
}

/// Interactive per-chain confirmation
struct PromptConfirm;

impl ConfirmationGate for PromptConfirm {
    fn confirm(&self, chain: &ChainName, order: &DeletionOrder) -> Result<bool> {
        print_ready_chain(chain, order);
        Confirm::new()
            .with_prompt("Proceed?")
            .default(false)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
    }
}

/// Message for a run that found no chains to look at
fn nothing_to_prune(filter: &[String]) -> String {
    if filter.is_empty() {
        "No chained PRs found among closed PRs.".to_string()
    } else {
        format!(
            "None of the requested chains ({}) were found among closed PRs.",
            filter.join(", ")
        )
    }
}

/// Run the prune command
pub async fn run_prune(path: &Path, remote: Option<&str>, options: PruneOptions) -> Result<()> {
    // =========================================================================
    // Phase 1: GATHER + PLAN
    // =========================================================================

    let ctx = CommandContext::new(path, remote, options.via).await?;
    let assessments = ctx.assess(&options.chains).await?;

    if assessments.is_empty() {
        println!("{}", nothing_to_prune(&options.chains).muted());
        return Ok(());
    }

    if options.dry_run {
        print_assessments(&assessments);
        println!();
        println!("{}", "Run without --dry-run to delete.".muted());
        return Ok(());
    }

    // =========================================================================
    // Phase 2: EXECUTE
    // =========================================================================

    println!(
        "{}",
        format!(
            "Deleting via {} ({})",
            ctx.settings.delete_via,
            ctx.remote_name
        )
        .muted()
    );

    let progress = CliProgress;
    let outcomes = if options.yes {
        prune_chains(&assessments, &AutoConfirm, ctx.deleter(), &progress).await?
    } else {
        prune_chains(&assessments, &PromptConfirm, ctx.deleter(), &progress).await?
    };

    print_summary(&outcomes);

    let stopped = outcomes
        .iter()
        .filter(|o| matches!(&o.outcome, Outcome::Deleted(report) if !report.is_success()))
        .count();
    if stopped > 0 {
        return Err(Error::IncompletePrune(stopped));
    }

    Ok(())
}
