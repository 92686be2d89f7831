//! Storage primitives for profile files.

pub mod atomic_toml;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
