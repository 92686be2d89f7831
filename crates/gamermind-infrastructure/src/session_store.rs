//! File-backed session store implementation.
//!
//! Persists the single session slot as two TOML entries under the profile
//! directory: the serialized user record and the framed token string. File
//! I/O runs on the blocking pool to keep async callers responsive.

use crate::paths::GamerMindPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};
use async_trait::async_trait;
use gamermind_core::error::{GamerMindError, Result};
use gamermind_core::session::{SessionStore, StoredSession};
use gamermind_core::user::User;
use serde::{Deserialize, Serialize};

/// On-disk wrapper for the token entry (a bare string is not a TOML document).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenEntry {
    token: String,
}

/// Session store backed by two TOML files under the profile directory.
///
/// Loading reports a half-present pair as absent and decodes failures as
/// `MalformedSession`, leaving the purge decision to the caller.
pub struct FileSessionStore {
    user_file: AtomicTomlFile<User>,
    token_file: AtomicTomlFile<TokenEntry>,
}

impl FileSessionStore {
    /// Creates a store over the session entries of the given path set.
    pub fn new(paths: &GamerMindPaths) -> Self {
        Self {
            user_file: AtomicTomlFile::new(paths.user_file()),
            token_file: AtomicTomlFile::new(paths.token_file()),
        }
    }

    fn map_load_err(entry: &str, e: AtomicTomlError) -> GamerMindError {
        if e.is_parse() {
            GamerMindError::malformed_session(format!("{}: {}", entry, e))
        } else {
            GamerMindError::storage(e.to_string())
        }
    }

    fn map_store_err(e: AtomicTomlError) -> GamerMindError {
        GamerMindError::storage(e.to_string())
    }

    fn map_join_err(e: tokio::task::JoinError) -> GamerMindError {
        GamerMindError::internal(format!("Failed to join storage task: {}", e))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<StoredSession>> {
        let user_file = self.user_file.clone();
        let token_file = self.token_file.clone();

        tokio::task::spawn_blocking(move || {
            let user = user_file
                .load()
                .map_err(|e| Self::map_load_err("user entry", e))?;
            let token = token_file
                .load()
                .map_err(|e| Self::map_load_err("token entry", e))?;

            match (user, token) {
                (Some(user), Some(entry)) => Ok(Some(StoredSession {
                    user,
                    token: entry.token,
                })),
                _ => Ok(None),
            }
        })
        .await
        .map_err(Self::map_join_err)?
    }

    async fn save(&self, user: &User, token: &str) -> Result<()> {
        let user_file = self.user_file.clone();
        let token_file = self.token_file.clone();
        let user = user.clone();
        let entry = TokenEntry {
            token: token.to_string(),
        };

        tokio::task::spawn_blocking(move || {
            user_file.save(&user).map_err(Self::map_store_err)?;
            token_file.save(&entry).map_err(Self::map_store_err)?;
            Ok(())
        })
        .await
        .map_err(Self::map_join_err)?
    }

    async fn clear(&self) -> Result<()> {
        let user_file = self.user_file.clone();
        let token_file = self.token_file.clone();

        tokio::task::spawn_blocking(move || {
            user_file.delete().map_err(Self::map_store_err)?;
            token_file.delete().map_err(Self::map_store_err)?;
            Ok(())
        })
        .await
        .map_err(Self::map_join_err)?
    }
}
