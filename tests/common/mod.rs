//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{BrokenConfirm, MockPlatformService, ScriptedConfirm};

use stack_prune::chain::{BranchLink, Chain};
use stack_prune::types::{ChainName, PartIndex, Platform, PlatformConfig, PullRequestRef};

/// GitHub config for `acme/widgets`
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
        host: None,
    }
}

/// Closed PR with owner-qualified labels
pub fn make_pr(number: u64, title: &str, head: &str, base: &str) -> PullRequestRef {
    PullRequestRef {
        number,
        title: title.to_string(),
        head_label: format!("acme:{head}"),
        base_label: format!("acme:{base}"),
        html_url: format!("https://github.com/acme/widgets/pull/{number}"),
        created_at: None,
    }
}

/// PRs for a well-formed chain: part 1 targets `main`, part k targets part k-1
pub fn make_chain_prs(name: &str, parts: &[u32]) -> Vec<PullRequestRef> {
    parts
        .iter()
        .map(|&part| {
            let base = if part == parts[0] {
                "main".to_string()
            } else {
                format!("{name}-{}", part - 1)
            };
            make_pr(
                u64::from(part) + 100,
                &format!("[{name} - Part {part}] Step {part}"),
                &format!("{name}-{part}"),
                &base,
            )
        })
        .collect()
}

/// Part index shorthand
pub fn part(index: u32) -> PartIndex {
    PartIndex::new(index).expect("part index must be positive")
}

/// Build a chain directly from `(part, head, base)` triples
pub fn make_chain(name: &str, links: &[(u32, &str, &str)]) -> Chain {
    let mut chain = Chain::new(ChainName::new(name));
    for (i, &(index, head, base)) in links.iter().enumerate() {
        chain.insert(
            part(index),
            BranchLink {
                pr_number: i as u64 + 1,
                html_url: String::new(),
                head_label: head.to_string(),
                base_label: base.to_string(),
            },
        );
    }
    chain
}
