//! Chat room gate state machine.

use super::color::ChatColor;
use crate::error::{GamerMindError, Result};
use serde::{Deserialize, Serialize};

/// Maximum accepted nickname length.
pub const MAX_NICKNAME_LEN: usize = 20;

/// Represents the gate state of the chat room.
///
/// The room moves `Unauthenticated -> Unjoined -> Joined`. Entry past
/// `Unauthenticated` requires an auth session established elsewhere;
/// leaving the room is modeled by replacing the state, not by a
/// transition out of `Joined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RoomState {
    /// No valid session exists; the room refuses entry.
    Unauthenticated,
    /// A session exists but no display nickname has been chosen yet.
    Unjoined,
    /// Participating with a display nickname and an assigned color.
    Joined {
        /// Display nickname chosen at join (stored trimmed).
        nickname: String,
        /// Palette color assigned at join.
        color: ChatColor,
    },
}

impl RoomState {
    /// Whether the room has been joined.
    pub fn is_joined(&self) -> bool {
        matches!(self, Self::Joined { .. })
    }

    /// The joined nickname, if any.
    pub fn nickname(&self) -> Option<&str> {
        match self {
            Self::Joined { nickname, .. } => Some(nickname),
            _ => None,
        }
    }

    /// The assigned color, if joined.
    pub fn color(&self) -> Option<ChatColor> {
        match self {
            Self::Joined { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Attempts the `Unjoined -> Joined` transition.
    ///
    /// The nickname is trimmed before validation; empty or oversized
    /// nicknames are rejected. On rejection the caller keeps the current
    /// state, so a failed join never leaves `Unjoined`.
    ///
    /// # Arguments
    ///
    /// * `nickname` - Requested display nickname
    /// * `color` - Palette color assigned to the participant
    ///
    /// # Returns
    ///
    /// The new `Joined` state, or a `Chat` error when the transition is not
    /// allowed from the current state or the nickname is invalid.
    pub fn join(&self, nickname: &str, color: ChatColor) -> Result<RoomState> {
        match self {
            Self::Unauthenticated => Err(GamerMindError::chat("sign in before joining the chat")),
            Self::Joined { .. } => Err(GamerMindError::chat("already joined the chat")),
            Self::Unjoined => {
                let trimmed = nickname.trim();
                if trimmed.is_empty() {
                    return Err(GamerMindError::chat("nickname must not be empty"));
                }
                if trimmed.chars().count() > MAX_NICKNAME_LEN {
                    return Err(GamerMindError::chat(format!(
                        "nickname must be at most {} characters",
                        MAX_NICKNAME_LEN
                    )));
                }
                Ok(Self::Joined {
                    nickname: trimmed.to_string(),
                    color,
                })
            }
        }
    }
}
