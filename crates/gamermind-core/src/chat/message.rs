//! Chat message types.
//!
//! This module contains types for entries in the room's append-only feed,
//! including roles and constructors for each message source.

use super::color::ChatColor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted body length for a composed message.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Author of the canned wellbeing notices.
pub const NOTICE_AUTHOR: &str = "GamerMind";

/// Author of join announcements.
pub const ANNOUNCEMENT_AUTHOR: &str = "System";

/// Represents the source of a message in the room feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message composed by a joined participant.
    Human,
    /// Platform-generated message (notices, join announcements).
    System,
    /// Message from a simulated bot persona.
    Bot,
}

/// A single entry in the room's append-only feed.
///
/// Messages are created on send or on timer fire, appended in order, and
/// never mutated or deleted afterwards. Reporting flags a message
/// externally without altering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// Display name of the author
    pub author: String,
    /// Message body
    pub body: String,
    /// Timestamp when the message was created
    pub timestamp: DateTime<Utc>,
    /// Source of the message
    pub role: MessageRole,
    /// Presentation color
    pub color: ChatColor,
}

impl ChatMessage {
    fn build(author: impl Into<String>, body: impl Into<String>, role: MessageRole, color: ChatColor) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            body: body.into(),
            timestamp: Utc::now(),
            role,
            color,
        }
    }

    /// Creates a human message from a joined participant.
    pub fn human(author: impl Into<String>, body: impl Into<String>, color: ChatColor) -> Self {
        Self::build(author, body, MessageRole::Human, color)
    }

    /// Creates a canned wellbeing notice authored by the platform.
    pub fn notice(body: impl Into<String>) -> Self {
        Self::build(NOTICE_AUTHOR, body, MessageRole::System, ChatColor::Cyan)
    }

    /// Creates a gray join announcement.
    pub fn announcement(body: impl Into<String>) -> Self {
        Self::build(ANNOUNCEMENT_AUTHOR, body, MessageRole::System, ChatColor::Gray)
    }

    /// Creates a system message with an explicit author and color.
    ///
    /// Used for seeded feed content that carries its own authorship.
    pub fn system_as(author: impl Into<String>, body: impl Into<String>, color: ChatColor) -> Self {
        Self::build(author, body, MessageRole::System, color)
    }

    /// Creates a bot persona message.
    pub fn bot(author: impl Into<String>, body: impl Into<String>, color: ChatColor) -> Self {
        Self::build(author, body, MessageRole::Bot, color)
    }

    /// Replaces the creation timestamp (used for seeded feed content).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
