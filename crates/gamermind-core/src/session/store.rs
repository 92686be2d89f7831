//! Session store trait.
//!
//! Defines the interface for the durable session slot: a single optional
//! pair of user record and bearer token.

use crate::error::Result;
use crate::user::User;
use async_trait::async_trait;

/// The durable pair held by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    /// The persisted user record
    pub user: User,
    /// The persisted framed token string
    pub token: String,
}

/// An abstract store for the single durable session.
///
/// This trait decouples the auth service from the storage mechanism (local
/// files, test double). There is only ever one logical writer, the auth
/// service; implementations do not need multi-writer coordination.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored session pair.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(StoredSession))`: Both entries present and decodable
    /// - `Ok(None)`: Nothing stored, or only half the pair present
    /// - `Err(GamerMindError::MalformedSession)`: Stored content could not
    ///   be decoded; callers are expected to purge
    /// - `Err(_)`: Error occurred during retrieval
    async fn load(&self) -> Result<Option<StoredSession>>;

    /// Durably stores the session pair, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `user` - The user record to persist
    /// * `token` - The framed token string to persist
    async fn save(&self, user: &User, token: &str) -> Result<()>;

    /// Removes both entries. Idempotent: clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}
