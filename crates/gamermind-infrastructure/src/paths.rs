//! Unified path management for the local profile directory.
//!
//! All durable artifacts (configuration and the session entries) live under
//! a single profile directory so a profile can be inspected, backed up, or
//! wiped as one unit.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the profile directory location.
pub const HOME_ENV_VAR: &str = "GAMERMIND_HOME";

/// Directory name used under the home directory by default.
const DEFAULT_DIR_NAME: &str = ".gamermind";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for the profile directory.
///
/// # Directory Structure
///
/// ```text
/// ~/.gamermind/           # Profile directory (default)
/// ├── config.toml         # Application configuration
/// └── session/            # Durable session slot
///     ├── user.toml       # Serialized user record
///     └── token.toml      # Serialized session token
/// ```
///
/// The root resolves, in priority order: an explicit override (CLI flag),
/// the `GAMERMIND_HOME` environment variable, then `~/.gamermind`.
#[derive(Debug, Clone)]
pub struct GamerMindPaths {
    root: PathBuf,
}

impl GamerMindPaths {
    /// Resolves the profile directory.
    ///
    /// # Arguments
    ///
    /// * `override_root` - Explicit root directory, highest priority
    ///
    /// # Returns
    ///
    /// - `Ok(GamerMindPaths)`: Resolved path set
    /// - `Err(PathError::HomeDirNotFound)`: No override, no environment
    ///   variable, and no detectable home directory
    pub fn resolve(override_root: Option<PathBuf>) -> Result<Self, PathError> {
        if let Some(root) = override_root {
            return Ok(Self { root });
        }
        if let Ok(env_root) = env::var(HOME_ENV_VAR) {
            if !env_root.trim().is_empty() {
                return Ok(Self {
                    root: PathBuf::from(env_root),
                });
            }
        }
        let home = dirs::home_dir().ok_or(PathError::HomeDirNotFound)?;
        Ok(Self {
            root: home.join(DEFAULT_DIR_NAME),
        })
    }

    /// Creates a path set rooted at the given directory.
    ///
    /// Mainly useful for tests that work against a scratch directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the profile root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Returns the path to the durable session directory.
    pub fn session_dir(&self) -> PathBuf {
        self.root.join("session")
    }

    /// Returns the path to the serialized user record.
    pub fn user_file(&self) -> PathBuf {
        self.session_dir().join("user.toml")
    }

    /// Returns the path to the serialized session token.
    pub fn token_file(&self) -> PathBuf {
        self.session_dir().join("token.toml")
    }

    /// Creates the profile directory tree if it does not exist yet.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Directories exist (created or already present)
    /// - `Err(std::io::Error)`: Directory creation failed
    pub fn ensure_directories(&self) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(self.session_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GamerMindPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.root(), temp_dir.path());
    }

    #[test]
    fn test_config_file_is_under_root() {
        let paths = GamerMindPaths::with_root("/tmp/profile");
        let config_file = paths.config_file();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(paths.root()));
    }

    #[test]
    fn test_session_entries_are_under_session_dir() {
        let paths = GamerMindPaths::with_root("/tmp/profile");
        assert!(paths.user_file().starts_with(paths.session_dir()));
        assert!(paths.token_file().starts_with(paths.session_dir()));
        assert!(paths.user_file().ends_with("user.toml"));
        assert!(paths.token_file().ends_with("token.toml"));
    }

    #[test]
    fn test_ensure_directories_creates_the_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("profile");
        let paths = GamerMindPaths::with_root(&root);

        paths.ensure_directories().unwrap();

        assert!(root.is_dir());
        assert!(paths.session_dir().is_dir());
    }
}
