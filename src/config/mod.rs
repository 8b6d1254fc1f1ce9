//! Settings for stack-prune
//!
//! Settings are layered: command-line flags override the repository file
//! (`.stack-prune.toml`), which overrides the user file
//! (`<config dir>/stack-prune/config.toml`), which overrides defaults.
//! The resulting [`Settings`] value is passed explicitly to whoever needs it.

mod storage;

pub use storage::{load_settings, load_settings_file, repo_settings_path, user_settings_path};

use crate::chain::DuplicatePolicy;
use serde::{Deserialize, Serialize};

/// How branches are removed from the remote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeleteVia {
    /// `git push --delete <remote> <branch>`
    #[default]
    Git,
    /// The hosting platform's REST API
    Api,
}

impl std::fmt::Display for DeleteVia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Git => write!(f, "git"),
            Self::Api => write!(f, "api"),
        }
    }
}

/// One settings file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SettingsFile {
    /// Remote to read and delete from
    pub remote: Option<String>,
    /// Deletion mechanism
    pub delete_via: Option<DeleteVia>,
    /// Handling of parts claimed by more than one PR
    pub duplicate_parts: Option<DuplicatePolicy>,
}

impl SettingsFile {
    /// Fill unset keys from `lower`
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            remote: self.remote.or(lower.remote),
            delete_via: self.delete_via.or(lower.delete_via),
            duplicate_parts: self.duplicate_parts.or(lower.duplicate_parts),
        }
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Remote override; `None` means auto-select
    pub remote: Option<String>,
    /// Deletion mechanism
    pub delete_via: DeleteVia,
    /// Handling of parts claimed by more than one PR
    pub duplicate_parts: DuplicatePolicy,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Self {
            remote: file.remote,
            delete_via: file.delete_via.unwrap_or_default(),
            duplicate_parts: file.duplicate_parts.unwrap_or_default(),
        }
    }
}
