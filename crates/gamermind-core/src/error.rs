//! Error types for the GamerMind application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire GamerMind application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GamerMindError {
    /// Login rejected: unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration rejected: the email is already taken
    #[error("User already exists with this email")]
    DuplicateEmail { email: String },

    /// Registration rejected: trimmed username shorter than the minimum
    #[error("Username must be at least {min} characters")]
    WeakUsername { min: usize },

    /// Registration rejected: password shorter than the minimum
    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    /// Stored session data could not be decoded
    #[error("Malformed session data: {0}")]
    MalformedSession(String),

    /// Operation cancelled before completion
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (storage layer)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chat room rule violation (bad nickname, oversized message, wrong state)
    #[error("Chat error: {0}")]
    Chat(String),

    /// Report validation or submission error
    #[error("Report error: {0}")]
    Report(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GamerMindError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a DuplicateEmail error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates a MalformedSession error
    pub fn malformed_session(message: impl Into<String>) -> Self {
        Self::MalformedSession(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Chat error
    pub fn chat(message: impl Into<String>) -> Self {
        Self::Chat(message.into())
    }

    /// Creates a Report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidCredentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a DuplicateEmail error
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }

    /// Check if this is a MalformedSession error
    pub fn is_malformed_session(&self) -> bool {
        matches!(self, Self::MalformedSession(_))
    }

    /// Check if this is a Cancelled error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error should be shown inline on the originating
    /// auth form rather than treated as a failure of the process.
    ///
    /// Returns true for the credential and registration validation kinds;
    /// storage and internal errors are not form feedback.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::DuplicateEmail { .. }
                | Self::WeakUsername { .. }
                | Self::WeakPassword { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GamerMindError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GamerMindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GamerMindError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GamerMindError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used at infrastructure edges)
impl From<anyhow::Error> for GamerMindError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(format!("{:#}", err))
    }
}

/// Conversion from String (for error messages)
impl From<String> for GamerMindError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, GamerMindError>`.
pub type Result<T> = std::result::Result<T, GamerMindError>;
