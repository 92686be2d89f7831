//! In-memory credential directory implementation.
//!
//! Backs login and registration with a plain map keyed by email. The
//! directory ships seeded with one demo account so the flows can be
//! exercised without registering first.

use async_trait::async_trait;
use chrono::NaiveDate;
use gamermind_core::error::{GamerMindError, Result};
use gamermind_core::user::{CredentialDirectory, CredentialRecord, User};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Email of the built-in demo account.
pub const DEMO_EMAIL: &str = "demo@gamermind.com";

/// Password of the built-in demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// In-memory credential directory keyed by exact email match.
///
/// Entries live for the process lifetime only; registration does not
/// persist accounts across restarts. The session slot is what survives, and
/// it is stored separately.
pub struct MemoryCredentialDirectory {
    entries: RwLock<HashMap<String, CredentialRecord>>,
}

impl MemoryCredentialDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a directory seeded with the demo account.
    pub fn seeded() -> Self {
        let record = Self::demo_record();
        let mut entries = HashMap::new();
        entries.insert(record.user.email.clone(), record);
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn demo_record() -> CredentialRecord {
        // Safe to unwrap: the seed date is a valid calendar date
        let join_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        CredentialRecord::new(
            DEMO_PASSWORD,
            User::new("1", "DemoUser", DEMO_EMAIL, join_date),
        )
    }
}

#[async_trait]
impl CredentialDirectory for MemoryCredentialDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>> {
        let entries = self.entries.read().await;
        Ok(entries.get(email).cloned())
    }

    async fn contains_email(&self, email: &str) -> Result<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(email))
    }

    async fn insert(&self, record: CredentialRecord) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&record.user.email) {
            return Err(GamerMindError::duplicate_email(record.user.email.clone()));
        }
        entries.insert(record.user.email.clone(), record);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.len())
    }
}
