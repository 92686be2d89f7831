//! Authentication use case implementation.
//!
//! This module provides the `AuthUseCase` which orchestrates the credential
//! directory and the session store to implement sign-in, registration,
//! sign-out, and startup session restore.

use chrono::Utc;
use gamermind_core::config::GamerMindConfig;
use gamermind_core::error::{GamerMindError, Result};
use gamermind_core::session::token;
use gamermind_core::session::{Session, SessionStore};
use gamermind_core::user::{CredentialDirectory, CredentialRecord, User};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Minimum username length, counted after trimming.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Use case for the account lifecycle.
///
/// `AuthUseCase` coordinates between `CredentialDirectory` and
/// `SessionStore` to handle all account-related operations: signing in,
/// registering, signing out, and restoring a persisted session at startup.
///
/// Every network-shaped operation runs behind a simulated latency so the
/// flows behave like calls to a remote service. Pending operations can be
/// aborted through a `CancellationToken`; a cancelled attempt never touches
/// session state.
///
/// # Thread Safety
///
/// The current session is held behind a `RwLock` for thread-safe concurrent
/// access. Collaborators are injected as `Arc<dyn Trait>` so callers decide
/// the concrete storage.
pub struct AuthUseCase {
    /// Directory of known accounts
    directory: Arc<dyn CredentialDirectory>,
    /// Persistent session pair storage
    store: Arc<dyn SessionStore>,
    /// Currently signed-in session, if any
    current: RwLock<Option<Session>>,
    /// Simulated network latency applied to sign-in and registration
    latency: Duration,
    /// Lifetime of issued tokens
    ttl: chrono::Duration,
}

impl AuthUseCase {
    /// Creates a new `AuthUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory of known accounts
    /// * `store` - Persistent session pair storage
    /// * `config` - Application config supplying latency and token lifetime
    pub fn new(
        directory: Arc<dyn CredentialDirectory>,
        store: Arc<dyn SessionStore>,
        config: &GamerMindConfig,
    ) -> Self {
        Self {
            directory,
            store,
            current: RwLock::new(None),
            latency: Duration::from_millis(config.auth_latency_ms),
            ttl: chrono::Duration::hours(config.session_ttl_hours),
        }
    }

    /// Signs in with the given credentials.
    ///
    /// # Arguments
    ///
    /// * `email` - Account email, matched exactly
    /// * `password` - Account password, matched exactly
    /// * `cancel` - Token that aborts the pending attempt
    ///
    /// # Returns
    ///
    /// * `Ok(user)` - The signed-in profile; the session pair is persisted
    /// * `Err(InvalidCredentials)` - Unknown email or wrong password,
    ///   deliberately indistinguishable
    /// * `Err(Cancelled)` - The token was cancelled during the delay
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<User> {
        self.simulate_latency(cancel).await?;

        let record = self.directory.find_by_email(email).await?;
        let record = match record {
            Some(record) if record.password == password => record,
            _ => return Err(GamerMindError::InvalidCredentials),
        };

        self.issue_session(record.user).await
    }

    /// Registers a new account and signs it in.
    ///
    /// Validation runs after the simulated delay, in a fixed order: a
    /// duplicate email wins over a weak username, which wins over a weak
    /// password. The stored username is the trimmed form.
    ///
    /// # Arguments
    ///
    /// * `username` - Desired display name; trimmed before validation
    /// * `email` - Account email, used as the directory key
    /// * `password` - Account password
    /// * `cancel` - Token that aborts the pending attempt
    ///
    /// # Returns
    ///
    /// * `Ok(user)` - The newly created, signed-in profile
    /// * `Err(DuplicateEmail)` - An account already exists for `email`
    /// * `Err(WeakUsername)` - Trimmed username shorter than the minimum
    /// * `Err(WeakPassword)` - Password shorter than the minimum
    /// * `Err(Cancelled)` - The token was cancelled during the delay
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<User> {
        self.simulate_latency(cancel).await?;

        if self.directory.contains_email(email).await? {
            return Err(GamerMindError::duplicate_email(email));
        }

        let username = username.trim();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(GamerMindError::WeakUsername {
                min: MIN_USERNAME_LEN,
            });
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(GamerMindError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let user = User::new(
            Utc::now().timestamp_millis().to_string(),
            username,
            email,
            Utc::now().date_naive(),
        );
        self.directory
            .insert(CredentialRecord::new(password, user.clone()))
            .await?;
        tracing::info!(target: "gamermind::auth", user_id = %user.id, "Account registered");

        self.issue_session(user).await
    }

    /// Signs out the current session.
    ///
    /// Clears both the in-memory session and the persisted pair. Safe to
    /// call when nobody is signed in.
    pub async fn logout(&self) -> Result<()> {
        *self.current.write().await = None;
        self.store.clear().await?;
        tracing::info!(target: "gamermind::auth", "Session cleared");
        Ok(())
    }

    /// Restores a persisted session at startup.
    ///
    /// An unreadable store entry, a malformed token, or an expired token is
    /// purged and reported as "nobody signed in" rather than an error, so a
    /// corrupt session file never wedges startup.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(user))` - A valid session was restored and is now current
    /// * `Ok(None)` - No session, or the stored one was purged
    pub async fn restore_session(&self) -> Result<Option<User>> {
        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(e) if e.is_malformed_session() => {
                tracing::warn!(target: "gamermind::auth", "Purging unreadable session: {}", e);
                self.store.clear().await?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let Some(stored) = stored else {
            return Ok(None);
        };

        let claims = match token::decode_token(&stored.token) {
            Ok(claims) => claims,
            Err(e) if e.is_malformed_session() => {
                tracing::warn!(target: "gamermind::auth", "Purging malformed token: {}", e);
                self.store.clear().await?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if claims.is_expired_at(Utc::now()) {
            tracing::info!(target: "gamermind::auth", "Stored session expired, clearing");
            self.store.clear().await?;
            return Ok(None);
        }

        // An expiry that cannot be represented as a timestamp is treated
        // like a malformed token.
        let Some(expires_at) = claims.expires_at() else {
            self.store.clear().await?;
            return Ok(None);
        };

        let user = stored.user;
        *self.current.write().await = Some(Session::new(user.clone(), expires_at));
        tracing::info!(target: "gamermind::auth", user_id = %user.id, "Session restored");
        Ok(Some(user))
    }

    /// Returns the currently signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        let current = self.current.read().await;
        current.as_ref().map(|session| session.user.clone())
    }

    /// Returns `true` while a session is active.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Issues a fresh token for `user`, persists the pair, and makes the
    /// session current.
    async fn issue_session(&self, user: User) -> Result<User> {
        let issued_at = Utc::now();
        let token = token::encode_token(&user, issued_at, self.ttl)?;
        self.store.save(&user, &token).await?;

        *self.current.write().await = Some(Session::new(user.clone(), issued_at + self.ttl));
        tracing::info!(target: "gamermind::auth", user_id = %user.id, "Session issued");
        Ok(user)
    }

    /// Waits out the simulated network latency, unless cancelled first.
    async fn simulate_latency(&self, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            _ = cancel.cancelled() => Err(GamerMindError::Cancelled),
            _ = tokio::time::sleep(self.latency) => Ok(()),
        }
    }
}
