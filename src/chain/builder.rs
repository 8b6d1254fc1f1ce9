//! Grouping closed PRs into named chains

use super::title::parse_chain_title;
use crate::types::{ChainName, PartIndex, PullRequestRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One link of a chain: the PR that owns a part index and its branches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchLink {
    /// PR/MR number
    pub pr_number: u64,
    /// Web URL for the PR/MR
    pub html_url: String,
    /// Owner-qualified source branch
    pub head_label: String,
    /// Owner-qualified target branch
    pub base_label: String,
}

impl BranchLink {
    fn from_pr(pr: &PullRequestRef) -> Self {
        Self {
            pr_number: pr.number,
            html_url: pr.html_url.clone(),
            head_label: pr.head_label.clone(),
            base_label: pr.base_label.clone(),
        }
    }
}

/// A part index claimed by more than one PR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePart {
    /// The contested part index
    pub part: PartIndex,
    /// PR that was overwritten
    pub replaced_pr: u64,
    /// PR that now owns the part
    pub kept_pr: u64,
}

/// What to do when two PRs claim the same part of a chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep the most recently scanned PR and report the overwrite
    #[default]
    LastWins,
    /// Refuse to prune a chain with contested parts
    Reject,
}

/// A named chain: part index → branch link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    name: ChainName,
    parts: BTreeMap<PartIndex, BranchLink>,
    duplicates: Vec<DuplicatePart>,
}

impl Chain {
    /// Create an empty chain
    pub const fn new(name: ChainName) -> Self {
        Self {
            name,
            parts: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Record a part, overwriting any earlier PR with the same index
    pub fn insert(&mut self, part: PartIndex, link: BranchLink) {
        let kept_pr = link.pr_number;
        if let Some(previous) = self.parts.insert(part, link) {
            debug!(
                chain = %self.name,
                %part,
                replaced_pr = previous.pr_number,
                kept_pr,
                "part index claimed twice, keeping later PR"
            );
            self.duplicates.push(DuplicatePart {
                part,
                replaced_pr: previous.pr_number,
                kept_pr,
            });
        }
    }

    /// Chain name
    pub const fn name(&self) -> &ChainName {
        &self.name
    }

    /// Parts in ascending index order
    pub const fn parts(&self) -> &BTreeMap<PartIndex, BranchLink> {
        &self.parts
    }

    /// Part indices in ascending order
    pub fn part_indices(&self) -> impl Iterator<Item = PartIndex> + '_ {
        self.parts.keys().copied()
    }

    /// Overwrites seen while building the chain
    pub fn duplicates(&self) -> &[DuplicatePart] {
        &self.duplicates
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the chain has no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// All chains found in a feed, ordered by name
pub type ChainSet = BTreeMap<ChainName, Chain>;

/// Group PRs into chains.
///
/// PRs must be supplied oldest first: when two PRs claim the same part, the
/// one scanned later wins. PRs whose titles do not follow the convention are
/// skipped.
pub fn build_chains<'a, I>(prs: I) -> ChainSet
where
    I: IntoIterator<Item = &'a PullRequestRef>,
{
    let mut chains = ChainSet::new();
    let mut skipped = 0_usize;

    for pr in prs {
        let Some((name, part)) = parse_chain_title(&pr.title).into_parts() else {
            skipped += 1;
            continue;
        };

        chains
            .entry(name.clone())
            .or_insert_with(|| Chain::new(name))
            .insert(part, BranchLink::from_pr(pr));
    }

    debug!(chains = chains.len(), skipped, "built chains");
    chains
}
