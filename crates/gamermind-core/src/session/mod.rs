//! Session domain module.
//!
//! This module contains the session model, the mock token codec, and the
//! durable store interface.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `token`: Mock token codec (`encode_token`, `decode_token`, `TokenClaims`)
//! - `store`: Store trait for session persistence (`SessionStore`)
//!
//! # Usage
//!
//! ```ignore
//! use gamermind_core::session::{Session, SessionStore, StoredSession};
//! use gamermind_core::session::token::{encode_token, decode_token};
//! ```

mod model;
mod store;
pub mod token;

// Re-export public API
pub use model::Session;
pub use store::{SessionStore, StoredSession};
