pub mod config_service;
pub mod credential_directory;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::credential_directory::{DEMO_EMAIL, DEMO_PASSWORD, MemoryCredentialDirectory};
pub use crate::paths::GamerMindPaths;
pub use crate::session_store::FileSessionStore;
