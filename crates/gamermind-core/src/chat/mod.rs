//! Chat domain module.
//!
//! This module contains the message feed entry types, the presentation
//! palette, and the room gate state machine.
//!
//! # Module Structure
//!
//! - `message`: Feed entry types (`ChatMessage`, `MessageRole`)
//! - `color`: Presentation palette (`ChatColor`)
//! - `room`: Room gate state machine (`RoomState`)

mod color;
mod message;
mod room;

// Re-export public API
pub use color::ChatColor;
pub use message::{
    ANNOUNCEMENT_AUTHOR, ChatMessage, MAX_MESSAGE_LEN, MessageRole, NOTICE_AUTHOR,
};
pub use room::{MAX_NICKNAME_LEN, RoomState};
