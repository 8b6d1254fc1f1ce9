//! Progress reporting hooks
//!
//! The library never prints. Callers that want feedback while chains are
//! processed pass a [`ProgressCallback`]; tests use [`NoopProgress`].

use crate::prune::ChainAssessment;
use async_trait::async_trait;

/// Receives progress events while chains are pruned
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A chain was skipped because it is incomplete or inconsistent
    async fn on_chain_blocked(&self, _assessment: &ChainAssessment) {}

    /// A chain was approved and its deletions are starting
    async fn on_chain_started(&self, _assessment: &ChainAssessment) {}

    /// The operator declined to prune a chain
    async fn on_chain_cancelled(&self, _assessment: &ChainAssessment) {}

    /// A branch deletion is about to be attempted
    async fn on_branch_deleting(&self, _branch: &str) {}

    /// A branch was removed from the remote
    async fn on_branch_deleted(&self, _branch: &str) {}

    /// A branch deletion failed; the rest of the chain is abandoned
    async fn on_branch_failed(&self, _branch: &str, _message: &str) {}
}

/// Progress callback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {}
