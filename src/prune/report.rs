//! Serializable chain summaries for `list --json` and status output

use crate::chain::{DuplicatePart, PartRange};
use crate::prune::plan::{BrokenLink, ChainAssessment, ChainStatus, IncompleteReason, PlannedDeletion};
use crate::types::{ChainName, PartIndex};
use serde::Serialize;

/// One part of a chain as seen in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSummary {
    /// Part index
    pub part: PartIndex,
    /// PR/MR number owning the part
    pub pr_number: u64,
    /// Source branch label
    pub head: String,
    /// Target branch label
    pub base: String,
}

/// Coarse chain state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryState {
    /// Deletable
    Ready,
    /// Missing or contested parts
    Incomplete,
    /// Base/head links do not line up
    Inconsistent,
}

/// Flat view of a [`ChainAssessment`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    /// Chain name
    pub name: ChainName,
    /// Coarse state
    pub state: SummaryState,
    /// Every part, ascending
    pub parts: Vec<PartSummary>,
    /// Parts missing between the lowest and highest index
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_parts: Vec<PartRange>,
    /// Parts claimed by more than one PR
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<DuplicatePart>,
    /// Links that failed the consistency check
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub broken_links: Vec<BrokenLink>,
    /// Deletion order for ready chains, tip first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deletion_order: Vec<PlannedDeletion>,
}

/// Flatten an assessment for display or JSON output
pub fn summarize(assessment: &ChainAssessment) -> ChainSummary {
    let chain = &assessment.chain;
    let parts = chain
        .parts()
        .iter()
        .map(|(part, link)| PartSummary {
            part: *part,
            pr_number: link.pr_number,
            head: link.head_label.clone(),
            base: link.base_label.clone(),
        })
        .collect();

    let mut summary = ChainSummary {
        name: chain.name().clone(),
        state: SummaryState::Ready,
        parts,
        missing_parts: Vec::new(),
        duplicates: chain.duplicates().to_vec(),
        broken_links: Vec::new(),
        deletion_order: Vec::new(),
    };

    match &assessment.status {
        ChainStatus::Ready(order) => {
            summary.deletion_order = order.steps().to_vec();
        }
        ChainStatus::Incomplete(IncompleteReason::Gaps { missing }) => {
            summary.state = SummaryState::Incomplete;
            summary.missing_parts.clone_from(missing);
        }
        ChainStatus::Incomplete(IncompleteReason::DuplicateParts { .. }) => {
            summary.state = SummaryState::Incomplete;
        }
        ChainStatus::Inconsistent(violation) => {
            summary.state = SummaryState::Inconsistent;
            summary.broken_links.clone_from(&violation.broken_links);
        }
    }

    summary
}
