//! Prune engine for stacked PR chains
//!
//! Three-phase pattern:
//! 1. Gather - closed PRs from the platform (effectful, done by the caller)
//! 2. Plan - [`assess_chains`] (pure, testable)
//! 3. Execute - [`prune_chains`] asks for confirmation and deletes branches

mod execute;
mod plan;
mod report;

pub use execute::{DeletionReport, FailedDeletion, execute_deletion};
pub use plan::{
    BranchPlan, BrokenLink, ChainAssessment, ChainStatus, ConsistencyViolation, DeletionOrder,
    IncompleteReason, PlannedDeletion, assess_chain, assess_chains, extract_branch_plan,
    plan_deletion,
};
pub use report::{ChainSummary, PartSummary, SummaryState, summarize};

use crate::error::Result;
use crate::platform::BranchDeleter;
use crate::progress::ProgressCallback;
use crate::types::ChainName;
use tracing::debug;

/// Asks the operator whether a ready chain may be deleted
pub trait ConfirmationGate: Send + Sync {
    /// Return `true` to delete the chain's branches in `order`
    fn confirm(&self, chain: &ChainName, order: &DeletionOrder) -> Result<bool>;
}

/// Gate that approves every chain (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _chain: &ChainName, _order: &DeletionOrder) -> Result<bool> {
        Ok(true)
    }
}

/// Terminal state of a chain for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Gaps or contested parts; nothing deleted
    Incomplete(IncompleteReason),
    /// Links do not line up; nothing deleted
    Inconsistent(ConsistencyViolation),
    /// Operator declined; nothing deleted
    Cancelled,
    /// Deletion ran (possibly stopping early)
    Deleted(DeletionReport),
}

/// What happened to one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Chain name
    pub chain: ChainName,
    /// Terminal state
    pub outcome: Outcome,
}

/// Walk every assessed chain, confirm and delete the ready ones.
///
/// Chains are independent: a failed deletion only stops its own chain. An
/// error from the confirmation gate itself aborts the run, since no further
/// answers can be collected.
pub async fn prune_chains(
    assessments: &[ChainAssessment],
    gate: &dyn ConfirmationGate,
    deleter: &dyn BranchDeleter,
    progress: &dyn ProgressCallback,
) -> Result<Vec<ChainOutcome>> {
    let mut outcomes = Vec::with_capacity(assessments.len());

    for assessment in assessments {
        let chain = assessment.chain.name().clone();

        let outcome = match &assessment.status {
            ChainStatus::Incomplete(reason) => {
                debug!(%chain, %reason, "chain cannot be deleted yet");
                progress.on_chain_blocked(assessment).await;
                Outcome::Incomplete(reason.clone())
            }
            ChainStatus::Inconsistent(violation) => {
                debug!(%chain, %violation, "chain links are inconsistent");
                progress.on_chain_blocked(assessment).await;
                Outcome::Inconsistent(violation.clone())
            }
            ChainStatus::Ready(order) => {
                if gate.confirm(&chain, order)? {
                    progress.on_chain_started(assessment).await;
                    Outcome::Deleted(execute_deletion(order, deleter, progress).await)
                } else {
                    debug!(%chain, "chain deletion cancelled");
                    progress.on_chain_cancelled(assessment).await;
                    Outcome::Cancelled
                }
            }
        };

        outcomes.push(ChainOutcome { chain, outcome });
    }

    Ok(outcomes)
}
