//! Credential directory trait.
//!
//! Defines the interface for the mock user directory that backs login and
//! registration.

use super::model::CredentialRecord;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract directory of credential entries keyed by email.
///
/// This trait decouples the auth service from the concrete directory
/// implementation (in-memory map, seeded fixture, test double). Emails are
/// compared by exact match; uniqueness is enforced on insert.
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Finds a credential entry by its email key.
    ///
    /// # Arguments
    ///
    /// * `email` - The email to look up (exact match)
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CredentialRecord))`: Entry found
    /// - `Ok(None)`: No entry for this email
    /// - `Err(_)`: Error occurred during lookup
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>>;

    /// Checks whether an email is already registered.
    ///
    /// # Arguments
    ///
    /// * `email` - The email to check
    async fn contains_email(&self, email: &str) -> Result<bool>;

    /// Inserts a new credential entry.
    ///
    /// # Arguments
    ///
    /// * `record` - The entry to insert
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Entry inserted
    /// - `Err(GamerMindError::DuplicateEmail)`: The email is already taken
    /// - `Err(_)`: Error occurred during insertion
    async fn insert(&self, record: CredentialRecord) -> Result<()>;

    /// Returns the number of registered entries.
    async fn count(&self) -> Result<usize>;
}
