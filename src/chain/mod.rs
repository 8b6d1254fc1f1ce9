//! Chain detection - pure functions over the closed PR feed
//!
//! Titles are parsed into `(chain name, part index)`, PRs are grouped into
//! [`Chain`]s, and each chain's part indices are checked for gaps.

mod builder;
mod sequence;
mod title;

pub use builder::{BranchLink, Chain, ChainSet, DuplicatePart, DuplicatePolicy, build_chains};
pub use sequence::{PartRange, is_sequential, missing_parts};
pub use title::{TitleMatch, parse_chain_title};
