//! Simulated chat interaction for GamerMind.
//!
//! This crate owns the live side of the chat room: the shared message
//! feed, the canned wellness notices and bot personas, and the background
//! simulator that posts them on timers.

pub mod feed;
pub mod notices;
pub mod personas;
pub mod simulator;

pub use feed::{ChatFeed, SIMULATED_ONLINE_COUNT};
pub use personas::{BUILTIN_PERSONAS, BotPersona, SUPPORT_BOT, WELLNESS_GUIDE};
pub use simulator::ChatSimulator;
