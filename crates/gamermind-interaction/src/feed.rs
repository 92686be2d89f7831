use chrono::{Duration, Utc};
use gamermind_core::chat::{ChatColor, ChatMessage};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fixed participant count reported for the simulated room.
pub const SIMULATED_ONLINE_COUNT: u32 = 47;

/// Shared, append-only message feed for a chat room.
///
/// The feed is the single source of truth for what the room displays.
/// Handles are cheap to clone and share the same underlying history,
/// so the simulator loops and the room use case can append concurrently.
#[derive(Clone)]
pub struct ChatFeed {
    /// In-memory message history, oldest first.
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl ChatFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a feed pre-populated with the room's opening conversation.
    ///
    /// The seed messages are backdated a few minutes so the room does not
    /// look freshly created when a user joins.
    pub fn seeded() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Self::seed_messages())),
        }
    }

    fn seed_messages() -> Vec<ChatMessage> {
        let now = Utc::now();
        vec![
            ChatMessage::system_as(
                "GamerSupport",
                "Welcome to the GamerMind anonymous chat! This is a safe space to share and support each other.",
                ChatColor::Cyan,
            )
            .with_timestamp(now - Duration::minutes(5)),
            ChatMessage::human(
                "PlayerOne",
                "Hey everyone, having a tough day with my gaming habits. Anyone else struggle with setting boundaries?",
                ChatColor::Purple,
            )
            .with_timestamp(now - Duration::minutes(4)),
            ChatMessage::human(
                "PixelWarrior",
                "@PlayerOne I totally get it. I started using a timer app and it really helped me become more aware of my time.",
                ChatColor::Green,
            )
            .with_timestamp(now - Duration::minutes(3)),
            ChatMessage::human(
                "QuestSeeker",
                "The hardest part for me was admitting I had a problem. But this community makes it feel less scary.",
                ChatColor::Yellow,
            )
            .with_timestamp(now - Duration::minutes(2)),
        ]
    }

    /// Appends a message to the end of the feed.
    pub async fn append(&self, message: ChatMessage) {
        let mut messages = self.messages.write().await;
        messages.push(message);
    }

    /// Returns a copy of the full message history, oldest first.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        let messages = self.messages.read().await;
        messages.clone()
    }

    /// Returns the number of messages currently in the feed.
    pub async fn len(&self) -> usize {
        let messages = self.messages.read().await;
        messages.len()
    }

    /// Returns `true` if the feed holds no messages.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ChatFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamermind_core::chat::MessageRole;

    #[tokio::test]
    async fn test_new_feed_is_empty() {
        let feed = ChatFeed::new();
        assert!(feed.is_empty().await);
        assert_eq!(feed.len().await, 0);
    }

    #[tokio::test]
    async fn test_seeded_feed_has_opening_conversation() {
        let feed = ChatFeed::seeded();
        let messages = feed.snapshot().await;

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].author, "GamerSupport");
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].author, "PlayerOne");
        assert_eq!(messages[2].author, "PixelWarrior");
        assert_eq!(messages[3].author, "QuestSeeker");
    }

    #[tokio::test]
    async fn test_seeded_feed_is_chronological() {
        let feed = ChatFeed::seeded();
        let messages = feed.snapshot().await;

        for pair in messages.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let feed = ChatFeed::new();
        feed.append(ChatMessage::notice("first")).await;
        feed.append(ChatMessage::notice("second")).await;

        let messages = feed.snapshot().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "first");
        assert_eq!(messages[1].body, "second");
    }

    #[tokio::test]
    async fn test_clones_share_history() {
        let feed = ChatFeed::new();
        let handle = feed.clone();

        handle.append(ChatMessage::notice("shared")).await;
        assert_eq!(feed.len().await, 1);
    }
}
