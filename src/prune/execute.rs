//! Deletion execution - effectful operations
//!
//! Takes a [`DeletionOrder`] (created by the pure planning functions) and
//! removes the branches one at a time through a [`BranchDeleter`].

use crate::platform::BranchDeleter;
use crate::progress::ProgressCallback;
use crate::prune::plan::DeletionOrder;
use serde::Serialize;
use tracing::{info, warn};

/// The branch deletion that stopped a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDeletion {
    /// Branch that could not be deleted
    pub branch: String,
    /// Error reported by the deleter
    pub message: String,
}

/// Result of deleting one chain's branches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// Branches removed, in deletion order
    pub deleted: Vec<String>,
    /// Branch where deletion failed (if any)
    pub failed: Option<FailedDeletion>,
    /// Branches left untouched after the failure
    pub not_attempted: Vec<String>,
}

impl DeletionReport {
    /// Check if every planned branch was deleted
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed.is_none()
    }

    /// Check if at least one branch was deleted
    #[must_use]
    pub const fn has_deletions(&self) -> bool {
        !self.deleted.is_empty()
    }
}

/// Execute a deletion order (EFFECTFUL)
///
/// Branches are deleted sequentially, tip first. The first failure stops
/// the chain: later branches are listed as not attempted and never touched.
pub async fn execute_deletion(
    order: &DeletionOrder,
    deleter: &dyn BranchDeleter,
    progress: &dyn ProgressCallback,
) -> DeletionReport {
    let mut report = DeletionReport::default();
    let mut steps = order.steps().iter();

    for step in steps.by_ref() {
        progress.on_branch_deleting(&step.branch).await;

        match deleter.delete_branch(&step.branch).await {
            Ok(()) => {
                info!(branch = %step.branch, part = %step.part, "deleted branch");
                progress.on_branch_deleted(&step.branch).await;
                report.deleted.push(step.branch.clone());
            }
            Err(e) => {
                let message = e.to_string();
                warn!(branch = %step.branch, error = %message, "branch deletion failed");
                progress.on_branch_failed(&step.branch, &message).await;
                report.failed = Some(FailedDeletion {
                    branch: step.branch.clone(),
                    message,
                });
                break;
            }
        }
    }

    report.not_attempted = steps.map(|s| s.branch.clone()).collect();
    report
}
