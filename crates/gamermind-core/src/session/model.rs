//! Session domain model.
//!
//! This module contains the core Session entity representing the single
//! authenticated session of the local profile.

use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session.
///
/// Exactly one session may be active per profile at a time. The embedded
/// expiry must be checked against current time before the session is
/// trusted; an expired session is treated as absent and purged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user
    pub user: User,
    /// Instant after which the session is no longer valid
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for the given user.
    pub fn new(user: User, expires_at: DateTime<Utc>) -> Self {
        Self { user, expires_at }
    }

    /// Whether the session is still valid at the given instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Whether the session has expired against the current wall clock.
    pub fn is_expired(&self) -> bool {
        !self.is_valid_at(Utc::now())
    }
}
