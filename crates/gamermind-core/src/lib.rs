pub mod chat;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{GamerMindError, Result};
