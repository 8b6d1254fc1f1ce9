//! CLI commands and terminal output

mod auth;
mod context;
mod list;
mod prune;
mod render;
pub mod style;

pub use auth::run_auth;
pub use list::run_list;
pub use prune::{PruneOptions, run_prune};

use anstream::println;
use async_trait::async_trait;
use render::print_blocked;
use stack_prune::progress::ProgressCallback;
use stack_prune::prune::ChainAssessment;
use style::{Stylize, arrow, check, cross};

/// Progress output for interactive runs
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_chain_blocked(&self, assessment: &ChainAssessment) {
        print_blocked(assessment);
    }

    async fn on_chain_started(&self, assessment: &ChainAssessment) {
        println!(
            "{} '{}'",
            "Deleting chain".emphasis(),
            assessment.chain.name().accent()
        );
    }

    async fn on_chain_cancelled(&self, assessment: &ChainAssessment) {
        println!(
            "{}",
            format!("Cancelled '{}', nothing deleted.", assessment.chain.name()).muted()
        );
    }

    async fn on_branch_deleting(&self, branch: &str) {
        println!("  {} Deleting '{}'", arrow(), branch.accent());
    }

    async fn on_branch_deleted(&self, branch: &str) {
        println!("  {} Deleted '{branch}'", check());
    }

    async fn on_branch_failed(&self, branch: &str, message: &str) {
        println!("  {} Failed to delete '{branch}'", cross());
        println!("      {}", message.muted());
        println!("      {}", "Remaining branches in this chain were left alone.".muted());
    }
}
