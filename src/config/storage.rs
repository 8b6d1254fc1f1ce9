//! Loading settings files from disk.

use super::{Settings, SettingsFile};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file name at the repository root.
const REPO_SETTINGS_FILE: &str = ".stack-prune.toml";

/// Directory name under the user config dir.
const APP_DIR: &str = "stack-prune";

/// Settings file name under the user config dir.
const USER_SETTINGS_FILE: &str = "config.toml";

/// Path of the repository settings file.
pub fn repo_settings_path(repo_root: &Path) -> PathBuf {
    repo_root.join(REPO_SETTINGS_FILE)
}

/// Path of the user settings file, if the platform has a config dir.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_SETTINGS_FILE))
}

/// Load one settings file.
///
/// Returns `None` if the file doesn't exist.
pub fn load_settings_file(path: &Path) -> Result<Option<SettingsFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let file: SettingsFile = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded settings file");
    Ok(Some(file))
}

/// Load the repository and user settings files and layer them.
///
/// Missing files are fine; malformed ones are an error.
pub fn load_settings(repo_root: &Path) -> Result<Settings> {
    let repo = load_settings_file(&repo_settings_path(repo_root))?.unwrap_or_default();

    let user = match user_settings_path() {
        Some(path) => load_settings_file(&path)?.unwrap_or_default(),
        None => SettingsFile::default(),
    };

    Ok(repo.or(user).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::DuplicatePolicy;
    use crate::config::DeleteVia;
    use tempfile::TempDir;

    #[test]
    fn test_repo_settings_path() {
        let temp = TempDir::new().unwrap();
        let path = repo_settings_path(temp.path());
        assert!(path.ends_with(".stack-prune.toml"));
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let temp = TempDir::new().unwrap();
        let loaded = load_settings_file(&repo_settings_path(temp.path())).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = repo_settings_path(temp.path());
        fs::write(
            &path,
            "remote = \"upstream\"\ndelete-via = \"api\"\nduplicate-parts = \"reject\"\n",
        )
        .unwrap();

        let loaded = load_settings_file(&path).unwrap().unwrap();
        assert_eq!(loaded.remote.as_deref(), Some("upstream"));
        assert_eq!(loaded.delete_via, Some(DeleteVia::Api));
        assert_eq!(loaded.duplicate_parts, Some(DuplicatePolicy::Reject));
    }

    #[test]
    fn test_load_partial_file_leaves_rest_unset() {
        let temp = TempDir::new().unwrap();
        let path = repo_settings_path(temp.path());
        fs::write(&path, "delete-via = \"git\"\n").unwrap();

        let loaded = load_settings_file(&path).unwrap().unwrap();
        assert_eq!(loaded.remote, None);
        assert_eq!(loaded.delete_via, Some(DeleteVia::Git));
        assert_eq!(loaded.duplicate_parts, None);
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = repo_settings_path(temp.path());
        fs::write(&path, "remotes = \"origin\"\n").unwrap();

        match load_settings_file(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains(".stack-prune.toml")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn test_bad_enum_value_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = repo_settings_path(temp.path());
        fs::write(&path, "delete-via = \"carrier-pigeon\"\n").unwrap();

        assert!(matches!(load_settings_file(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_repo_file_overrides_lower_layer() {
        let repo = SettingsFile {
            remote: Some("upstream".to_string()),
            delete_via: None,
            duplicate_parts: None,
        };
        let user = SettingsFile {
            remote: Some("origin".to_string()),
            delete_via: Some(DeleteVia::Api),
            duplicate_parts: None,
        };

        let settings: Settings = repo.or(user).into();
        assert_eq!(settings.remote.as_deref(), Some("upstream"));
        assert_eq!(settings.delete_via, DeleteVia::Api);
        assert_eq!(settings.duplicate_parts, DuplicatePolicy::LastWins);
    }
}
