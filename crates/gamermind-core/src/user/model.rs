//! User account domain model.
//!
//! Represents registered accounts and the credential entries that back the
//! mock directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// Accounts are immutable once created; there is no edit operation. The
/// email doubles as the unique lookup key in the credential directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque account identifier (time-derived string for new accounts)
    pub id: String,
    /// Display name chosen at registration
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Date the account was created
    pub join_date: NaiveDate,
}

impl User {
    /// Creates a new user record.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            join_date,
        }
    }
}

/// A single entry in the mock credential directory.
///
/// Maps an email to a plaintext password and the owning user record. This is
/// deliberately not production-shaped: no hashing, no salting. It exists only
/// to back the demo data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Plaintext demo password
    pub password: String,
    /// The account this entry authenticates
    pub user: User,
}

impl CredentialRecord {
    /// Creates a credential entry for the given user.
    pub fn new(password: impl Into<String>, user: User) -> Self {
        Self {
            password: password.into(),
            user,
        }
    }
}
