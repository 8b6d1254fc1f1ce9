//! Title convention parser
//!
//! A chained PR title starts with `[<chain-name> - Part <n>]`, where the
//! chain name is at least two hyphen-joined word tokens.

use crate::types::{ChainName, PartIndex};
use regex::Regex;
use std::sync::LazyLock;

static CHAIN_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\w+(?:-\w+)+) - Part\s*(\d+)\]").expect("chain title pattern is valid")
});

/// Result of matching a PR title against the chain convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMatch {
    /// Title carries a chain marker
    Chained {
        /// Chain the PR belongs to
        name: ChainName,
        /// Position within the chain
        part: PartIndex,
    },
    /// Title does not follow the convention; the PR is not part of a chain
    Unchained,
}

impl TitleMatch {
    /// Returns `(name, part)` for chained titles
    pub fn into_parts(self) -> Option<(ChainName, PartIndex)> {
        match self {
            Self::Chained { name, part } => Some((name, part)),
            Self::Unchained => None,
        }
    }
}

/// Parse a PR title.
///
/// Only a marker at the very start of the title counts. A part number of
/// zero, or one too large for `u32`, leaves the title unchained.
pub fn parse_chain_title(title: &str) -> TitleMatch {
    let Some(caps) = CHAIN_TITLE.captures(title) else {
        return TitleMatch::Unchained;
    };

    let part = caps[2].parse::<u32>().ok().and_then(PartIndex::new);
    match part {
        Some(part) => TitleMatch::Chained {
            name: ChainName::new(&caps[1]),
            part,
        },
        None => TitleMatch::Unchained,
    }
}
