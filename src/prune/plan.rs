//! Deletion planning - pure functions from a chain to a deletion order
//!
//! No I/O happens here. A chain is first checked for gaps (and, depending on
//! policy, contested parts), then its links are turned into a tip-to-root
//! branch list and cross-checked so that every part targets the branch of
//! the part below it.

use crate::chain::{
    Chain, ChainSet, DuplicatePart, DuplicatePolicy, PartRange, is_sequential, missing_parts,
};
use crate::types::{PartIndex, short_branch_name};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Branches of a chain, tip first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchPlan {
    /// One-part chain: only its head branch
    Single {
        /// Part index of the only PR
        part: PartIndex,
        /// Head label of the only PR
        head: String,
    },
    /// Multi-part chain as parallel lists ordered tip → root
    Stack {
        /// Part indices, descending
        parts: Vec<PartIndex>,
        /// Head labels, `heads[i]` belongs to `parts[i]`
        heads: Vec<String>,
        /// Base labels, `bases[i]` is what `heads[i]` targets
        bases: Vec<String>,
    },
}

/// Derive the branch plan of a chain.
///
/// Returns `None` for an empty chain.
pub fn extract_branch_plan(chain: &Chain) -> Option<BranchPlan> {
    let links: Vec<_> = chain.parts().iter().rev().collect();

    match links.as_slice() {
        [] => None,
        [(part, link)] => Some(BranchPlan::Single {
            part: **part,
            head: link.head_label.clone(),
        }),
        _ => {
            let parts = links.iter().map(|(part, _)| **part).collect();
            let heads = links.iter().map(|(_, l)| l.head_label.clone()).collect();
            let bases = links.iter().map(|(_, l)| l.base_label.clone()).collect();
            Some(BranchPlan::Stack { parts, heads, bases })
        }
    }
}

/// One branch scheduled for deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDeletion {
    /// Part the branch belongs to
    pub part: PartIndex,
    /// Owner-qualified label as reported by the platform
    pub label: String,
    /// Short branch name handed to the deleter
    pub branch: String,
}

/// Branches in the order they must be deleted (tip first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeletionOrder {
    steps: Vec<PlannedDeletion>,
}

impl DeletionOrder {
    fn push(&mut self, part: PartIndex, label: &str) {
        self.steps.push(PlannedDeletion {
            part,
            label: label.to_string(),
            branch: short_branch_name(label).to_string(),
        });
    }

    /// Planned deletions, tip first
    pub fn steps(&self) -> &[PlannedDeletion] {
        &self.steps
    }

    /// Short branch names, tip first
    pub fn branches(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.branch.as_str()).collect()
    }

    /// Number of branches to delete
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there is nothing to delete
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A part whose base is not the head of the part below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// The part with the unexpected base
    pub part: PartIndex,
    /// Base label the PR actually targets
    pub base_label: String,
    /// Head label of the next lower part
    pub expected_base: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "part {} targets '{}' instead of '{}'",
            self.part, self.base_label, self.expected_base
        )
    }
}

/// The chain's base/head adjacency is not a single linear path
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} inconsistent link(s) in chain", .broken_links.len())]
pub struct ConsistencyViolation {
    /// Every link that failed the check, tip first
    pub broken_links: Vec<BrokenLink>,
}

/// Check a branch plan and turn it into a deletion order.
///
/// For a stack, `bases` without its last (root) entry must equal `heads`
/// without its first (tip) entry.
pub fn plan_deletion(plan: &BranchPlan) -> std::result::Result<DeletionOrder, ConsistencyViolation> {
    let mut order = DeletionOrder::default();

    match plan {
        BranchPlan::Single { part, head } => order.push(*part, head),
        BranchPlan::Stack { parts, heads, bases } => {
            let broken_links: Vec<BrokenLink> = parts
                .iter()
                .zip(bases)
                .zip(heads.iter().skip(1))
                .filter(|((_, base), below)| base != below)
                .map(|((part, base), below)| BrokenLink {
                    part: *part,
                    base_label: base.clone(),
                    expected_base: below.clone(),
                })
                .collect();

            if !broken_links.is_empty() {
                return Err(ConsistencyViolation { broken_links });
            }

            for (part, head) in parts.iter().zip(heads) {
                order.push(*part, head);
            }
        }
    }

    Ok(order)
}

/// Why a chain cannot be pruned yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum IncompleteReason {
    /// Part indices are not contiguous
    Gaps {
        /// Runs of indices missing between the lowest and highest part
        missing: Vec<PartRange>,
    },
    /// Several PRs claim the same part (only under [`DuplicatePolicy::Reject`])
    DuplicateParts {
        /// The contested parts
        duplicates: Vec<DuplicatePart>,
    },
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaps { missing } => {
                let list: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(f, "missing part(s) {}", list.join(", "))
            }
            Self::DuplicateParts { duplicates } => {
                let list: Vec<String> = duplicates
                    .iter()
                    .map(|d| format!("part {} (#{} and #{})", d.part, d.replaced_pr, d.kept_pr))
                    .collect();
                write!(f, "contested {}", list.join(", "))
            }
        }
    }
}

/// Where a chain ended up after planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainStatus {
    /// Not deletable yet
    Incomplete(IncompleteReason),
    /// Sequential, but the links do not line up
    Inconsistent(ConsistencyViolation),
    /// Ready to delete in this order
    Ready(DeletionOrder),
}

/// A chain together with its planning result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAssessment {
    /// The chain as built from the feed
    pub chain: Chain,
    /// Planning result
    pub status: ChainStatus,
}

impl ChainAssessment {
    /// Deletion order, if the chain is ready
    pub const fn deletion_order(&self) -> Option<&DeletionOrder> {
        match &self.status {
            ChainStatus::Ready(order) => Some(order),
            _ => None,
        }
    }
}

/// Plan a single chain (PURE - no I/O, easily testable)
pub fn assess_chain(chain: Chain, policy: DuplicatePolicy) -> ChainAssessment {
    if policy == DuplicatePolicy::Reject && !chain.duplicates().is_empty() {
        let duplicates = chain.duplicates().to_vec();
        return ChainAssessment {
            chain,
            status: ChainStatus::Incomplete(IncompleteReason::DuplicateParts { duplicates }),
        };
    }

    if !is_sequential(chain.part_indices()) {
        let missing = missing_parts(chain.part_indices());
        return ChainAssessment {
            chain,
            status: ChainStatus::Incomplete(IncompleteReason::Gaps { missing }),
        };
    }

    let status = match extract_branch_plan(&chain).map(|plan| plan_deletion(&plan)) {
        Some(Ok(order)) => ChainStatus::Ready(order),
        Some(Err(violation)) => ChainStatus::Inconsistent(violation),
        None => ChainStatus::Incomplete(IncompleteReason::Gaps {
            missing: Vec::new(),
        }),
    };

    ChainAssessment { chain, status }
}

/// Plan every chain of a feed
pub fn assess_chains(chains: ChainSet, policy: DuplicatePolicy) -> Vec<ChainAssessment> {
    chains
        .into_values()
        .map(|chain| assess_chain(chain, policy))
        .collect()
}
