//! stack-prune - clean up the branches of stacked pull request chains
//!
//! A chain is a group of PRs whose titles follow the convention
//! `[<chain-name> - Part <n>]`, each one built on the branch of the previous
//! part. Once every PR of a chain is closed, its branches can be removed from
//! the shared remote, tip first.
//!
//! The crate follows a gather / plan / execute split:
//! 1. Gather - [`platform::PlatformService::list_closed_prs`] (effectful)
//! 2. Plan - [`chain::build_chains`] and [`prune::assess_chains`] (pure)
//! 3. Execute - [`prune::prune_chains`] through a [`platform::BranchDeleter`]

pub mod auth;
pub mod chain;
pub mod config;
pub mod error;
pub mod git;
pub mod platform;
pub mod progress;
pub mod prune;
pub mod types;
