//! User domain module.
//!
//! This module contains user account models and the credential directory
//! interface.
//!
//! # Module Structure
//!
//! - `model`: User account and credential entry models
//! - `directory`: Credential directory trait
//!
//! # Usage
//!
//! ```ignore
//! use gamermind_core::user::{User, CredentialRecord, CredentialDirectory};
//! ```

mod directory;
mod model;

// Re-export public API
pub use directory::CredentialDirectory;
pub use model::{CredentialRecord, User};
