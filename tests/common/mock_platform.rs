//! In-memory platform and confirmation doubles
//!
//! The platform serves a fixed closed-PR feed and records every branch
//! deletion; the gates answer prompts from a script or fail outright.

use async_trait::async_trait;
use stack_prune::error::{Error, Result};
use stack_prune::platform::{BranchDeleter, PlatformService};
use stack_prune::prune::{ConfirmationGate, DeletionOrder};
use stack_prune::types::{ChainName, PlatformConfig, PullRequestRef};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// to keep call recording and error injection explicit.
///
/// Features:
/// - Configurable closed PR feed
/// - Deletion call tracking, in order
/// - Per-branch deletion failures
/// - Error injection for the feed
pub struct MockPlatformService {
    config: PlatformConfig,
    closed_prs: Mutex<Vec<PullRequestRef>>,
    // Call tracking
    list_calls: Mutex<usize>,
    delete_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    failing_branches: Mutex<HashSet<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            closed_prs: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
            delete_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            failing_branches: Mutex::new(HashSet::new()),
        }
    }

    /// Set the closed PR feed (oldest first)
    pub fn set_closed_prs(&self, prs: Vec<PullRequestRef>) {
        *self.closed_prs.lock().unwrap() = prs;
    }

    // === Error injection methods ===

    /// Make `list_closed_prs` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `delete_branch` fail for a specific branch
    pub fn fail_delete(&self, branch: &str) {
        self.failing_branches
            .lock()
            .unwrap()
            .insert(branch.to_string());
    }

    // === Call verification methods ===

    /// Branches `delete_branch` was called with, in call order
    pub fn get_delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Number of `list_closed_prs` calls
    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Assert that `delete_branch` was NOT called for a branch
    pub fn assert_delete_not_called(&self, branch: &str) {
        let calls = self.get_delete_calls();
        assert!(
            !calls.iter().any(|c| c == branch),
            "Expected delete_branch({branch}) NOT to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl BranchDeleter for MockPlatformService {
    async fn delete_branch(&self, branch: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(branch.to_string());

        if self.failing_branches.lock().unwrap().contains(branch) {
            return Err(Error::BranchDeletion {
                branch: branch.to_string(),
                message: "remote ref does not exist".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_closed_prs(&self) -> Result<Vec<PullRequestRef>> {
        *self.list_calls.lock().unwrap() += 1;

        // Check for injected error
        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.closed_prs.lock().unwrap().clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// Confirmation gate with scripted answers
///
/// Answers are consumed in order; once exhausted every further chain is
/// declined.
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedConfirm {
    /// Gate answering with `answers` in order
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Chains the gate was asked about, with their planned branches
    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmationGate for ScriptedConfirm {
    fn confirm(&self, chain: &ChainName, order: &DeletionOrder) -> Result<bool> {
        self.asked.lock().unwrap().push((
            chain.to_string(),
            order.branches().iter().map(ToString::to_string).collect(),
        ));
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}

/// Gate whose prompt fails (e.g. no terminal)
pub struct BrokenConfirm;

impl ConfirmationGate for BrokenConfirm {
    fn confirm(&self, _chain: &ChainName, _order: &DeletionOrder) -> Result<bool> {
        Err(Error::Internal("Failed to read confirmation: not a terminal".to_string()))
    }
}
