//! Chat room use case implementation.
//!
//! This module provides the `ChatRoomUseCase` which gates the simulated
//! room behind authentication, runs the join handshake, and relays user
//! messages into the shared feed.

use crate::auth_usecase::AuthUseCase;
use gamermind_core::chat::{ChatColor, ChatMessage, MAX_MESSAGE_LEN, RoomState};
use gamermind_core::config::GamerMindConfig;
use gamermind_core::error::{GamerMindError, Result};
use gamermind_interaction::feed::{ChatFeed, SIMULATED_ONLINE_COUNT};
use gamermind_interaction::simulator::ChatSimulator;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Use case for the anonymous chat room.
///
/// The room is visible in one of three states: signed out (nothing shown),
/// signed in but not joined (nickname prompt), and joined (live feed). The
/// state machine itself lives in `RoomState`; this use case resolves the
/// authentication side on every access so a sign-out immediately drops the
/// room back behind the gate.
///
/// Joining seeds a per-join `ChatSimulator` that posts wellness notices and
/// bot replies into the feed until `leave` is called.
pub struct ChatRoomUseCase {
    /// Authentication state the room is gated on
    auth: Arc<AuthUseCase>,
    /// Shared message history
    feed: ChatFeed,
    /// Timing for the background simulator
    config: GamerMindConfig,
    /// Simulator for the current join, torn down on leave
    simulator: RwLock<Option<Arc<ChatSimulator>>>,
    /// Gate state as of the last transition
    state: RwLock<RoomState>,
}

impl ChatRoomUseCase {
    /// Creates a room gated on `auth`, with the opening conversation
    /// already seeded into the feed.
    pub fn new(auth: Arc<AuthUseCase>, config: &GamerMindConfig) -> Self {
        Self {
            auth,
            feed: ChatFeed::seeded(),
            config: config.clone(),
            simulator: RwLock::new(None),
            state: RwLock::new(RoomState::Unauthenticated),
        }
    }

    /// Returns the room state with the authentication gate applied.
    pub async fn state(&self) -> RoomState {
        self.resolve_state().await
    }

    /// Joins the room under a nickname.
    ///
    /// A presentation color is drawn from the palette, the join is announced
    /// in the feed, and the background simulator starts.
    ///
    /// # Arguments
    ///
    /// * `nickname` - Desired display name; trimmed before validation
    ///
    /// # Returns
    ///
    /// * `Ok(state)` - The new joined state carrying nickname and color
    /// * `Err(Chat)` - Not signed in, already joined, or the nickname is
    ///   empty or too long
    pub async fn join(&self, nickname: &str) -> Result<RoomState> {
        let current = self.resolve_state().await;
        let color = {
            let mut rng = rand::thread_rng();
            ChatColor::random_palette(&mut rng)
        };
        let next = current.join(nickname, color)?;

        if let RoomState::Joined { nickname, .. } = &next {
            self.feed
                .append(ChatMessage::announcement(format!(
                    "{} joined the chat",
                    nickname
                )))
                .await;
            tracing::info!(target: "gamermind::chat", nickname = %nickname, "Joined the room");
        }
        *self.state.write().await = next.clone();

        self.start_simulator().await;
        Ok(next)
    }

    /// Sends a message to the room as the joined nickname.
    ///
    /// The body is trimmed first. A body that trims to nothing is silently
    /// dropped, mirroring how an empty input box submits nothing.
    ///
    /// # Arguments
    ///
    /// * `body` - Raw message text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(message))` - The message as appended to the feed
    /// * `Ok(None)` - The body trimmed to nothing
    /// * `Err(Chat)` - Not joined, or the body exceeds the length cap
    pub async fn send_message(&self, body: &str) -> Result<Option<ChatMessage>> {
        let state = self.resolve_state().await;
        let (nickname, color) = match &state {
            RoomState::Joined { nickname, color } => (nickname.clone(), *color),
            RoomState::Unauthenticated => {
                return Err(GamerMindError::chat("sign in before sending messages"));
            }
            RoomState::Unjoined => {
                return Err(GamerMindError::chat("join the chat before sending messages"));
            }
        };

        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > MAX_MESSAGE_LEN {
            return Err(GamerMindError::chat(format!(
                "message exceeds {} characters",
                MAX_MESSAGE_LEN
            )));
        }

        let message = ChatMessage::human(nickname, trimmed, color);
        self.feed.append(message.clone()).await;
        Ok(Some(message))
    }

    /// Returns a copy of the full message history, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.feed.snapshot().await
    }

    /// Returns the participant count shown for the room.
    pub fn online_count(&self) -> u32 {
        SIMULATED_ONLINE_COUNT
    }

    /// Leaves the room: tears down the simulator and drops back to the
    /// nickname prompt. Safe to call when not joined.
    pub async fn leave(&self) {
        if let Some(simulator) = self.simulator.write().await.take() {
            simulator.shutdown().await;
        }

        let mut state = self.state.write().await;
        if state.is_joined() {
            *state = RoomState::Unjoined;
            tracing::info!(target: "gamermind::chat", "Left the room");
        }
    }

    /// Applies the authentication gate to the stored state.
    ///
    /// Signed out always resolves to `Unauthenticated`; a fresh sign-in
    /// promotes the gate to `Unjoined` so the nickname prompt shows.
    async fn resolve_state(&self) -> RoomState {
        let authenticated = self.auth.is_authenticated().await;
        let mut state = self.state.write().await;

        if authenticated {
            if matches!(*state, RoomState::Unauthenticated) {
                *state = RoomState::Unjoined;
            }
        } else {
            *state = RoomState::Unauthenticated;
        }
        state.clone()
    }

    /// Starts a fresh simulator for this join, replacing any previous one.
    async fn start_simulator(&self) {
        let mut slot = self.simulator.write().await;
        if let Some(previous) = slot.take() {
            previous.shutdown().await;
        }

        let simulator = Arc::new(ChatSimulator::new(self.feed.clone(), &self.config));
        simulator.start().await;
        *slot = Some(simulator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use gamermind_core::chat::{ANNOUNCEMENT_AUTHOR, MessageRole};
    use gamermind_core::session::{SessionStore, StoredSession};
    use gamermind_core::user::{CredentialDirectory, CredentialRecord, User};
    use std::collections::HashMap;
    use tokio::sync::Mutex;
    use tokio_util::sync::CancellationToken;

    const DEMO_EMAIL: &str = "demo@gamermind.com";
    const DEMO_PASSWORD: &str = "password123";

    struct MockDirectory {
        records: Mutex<HashMap<String, CredentialRecord>>,
    }

    impl MockDirectory {
        fn with_demo() -> Self {
            let user = User::new(
                "1",
                "DemoUser",
                DEMO_EMAIL,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            );
            let mut records = HashMap::new();
            records.insert(
                DEMO_EMAIL.to_string(),
                CredentialRecord::new(DEMO_PASSWORD, user),
            );
            Self {
                records: Mutex::new(records),
            }
        }
    }

    #[async_trait]
    impl CredentialDirectory for MockDirectory {
        async fn find_by_email(&self, email: &str) -> gamermind_core::Result<Option<CredentialRecord>> {
            Ok(self.records.lock().await.get(email).cloned())
        }

        async fn contains_email(&self, email: &str) -> gamermind_core::Result<bool> {
            Ok(self.records.lock().await.contains_key(email))
        }

        async fn insert(&self, record: CredentialRecord) -> gamermind_core::Result<()> {
            self.records
                .lock()
                .await
                .insert(record.user.email.clone(), record);
            Ok(())
        }

        async fn count(&self) -> gamermind_core::Result<usize> {
            Ok(self.records.lock().await.len())
        }
    }

    #[derive(Default)]
    struct MockStore {
        stored: Mutex<Option<StoredSession>>,
    }

    #[async_trait]
    impl SessionStore for MockStore {
        async fn load(&self) -> gamermind_core::Result<Option<StoredSession>> {
            Ok(self.stored.lock().await.clone())
        }

        async fn save(&self, user: &User, token: &str) -> gamermind_core::Result<()> {
            *self.stored.lock().await = Some(StoredSession {
                user: user.clone(),
                token: token.to_string(),
            });
            Ok(())
        }

        async fn clear(&self) -> gamermind_core::Result<()> {
            *self.stored.lock().await = None;
            Ok(())
        }
    }

    fn test_config() -> GamerMindConfig {
        GamerMindConfig {
            auth_latency_ms: 0,
            ..GamerMindConfig::default()
        }
    }

    fn room() -> (ChatRoomUseCase, Arc<AuthUseCase>) {
        let auth = Arc::new(AuthUseCase::new(
            Arc::new(MockDirectory::with_demo()),
            Arc::new(MockStore::default()),
            &test_config(),
        ));
        let room = ChatRoomUseCase::new(auth.clone(), &test_config());
        (room, auth)
    }

    async fn sign_in(auth: &AuthUseCase) {
        let cancel = CancellationToken::new();
        auth.login(DEMO_EMAIL, DEMO_PASSWORD, &cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_room_starts_behind_the_gate() {
        let (room, _auth) = room();

        assert_eq!(room.state().await, RoomState::Unauthenticated);
        let err = room.join("Player").await.unwrap_err();
        assert!(matches!(err, GamerMindError::Chat(_)));
    }

    #[tokio::test]
    async fn test_sign_in_promotes_to_nickname_prompt() {
        let (room, auth) = room();
        sign_in(&auth).await;

        assert_eq!(room.state().await, RoomState::Unjoined);
    }

    #[tokio::test]
    async fn test_seeded_history_is_visible() {
        let (room, _auth) = room();

        let messages = room.messages().await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].author, "GamerSupport");
    }

    #[tokio::test]
    async fn test_join_announces_and_assigns_palette_color() {
        let (room, auth) = room();
        sign_in(&auth).await;

        let state = room.join("  Nighthawk  ").await.unwrap();

        assert_eq!(state.nickname(), Some("Nighthawk"));
        let color = state.color().unwrap();
        assert!(ChatColor::PALETTE.contains(&color));

        let messages = room.messages().await;
        let last = messages.last().unwrap();
        assert_eq!(last.author, ANNOUNCEMENT_AUTHOR);
        assert_eq!(last.role, MessageRole::System);
        assert_eq!(last.body, "Nighthawk joined the chat");
        room.leave().await;
    }

    #[tokio::test]
    async fn test_join_twice_is_rejected() {
        let (room, auth) = room();
        sign_in(&auth).await;

        room.join("Nighthawk").await.unwrap();
        let err = room.join("Nighthawk").await.unwrap_err();
        assert!(matches!(err, GamerMindError::Chat(_)));
        room.leave().await;
    }

    #[tokio::test]
    async fn test_send_requires_joining_first() {
        let (room, auth) = room();
        sign_in(&auth).await;

        let err = room.send_message("hello").await.unwrap_err();
        assert!(matches!(err, GamerMindError::Chat(_)));
    }

    #[tokio::test]
    async fn test_send_appends_trimmed_message_with_assigned_color() {
        let (room, auth) = room();
        sign_in(&auth).await;
        let state = room.join("Nighthawk").await.unwrap();

        let message = room
            .send_message("  hello everyone  ")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(message.author, "Nighthawk");
        assert_eq!(message.body, "hello everyone");
        assert_eq!(Some(message.color), state.color());
        assert_eq!(room.messages().await.last().unwrap().id, message.id);
        room.leave().await;
    }

    #[tokio::test]
    async fn test_send_drops_whitespace_only_bodies() {
        let (room, auth) = room();
        sign_in(&auth).await;
        room.join("Nighthawk").await.unwrap();
        let before = room.messages().await.len();

        let sent = room.send_message("   \t  ").await.unwrap();

        assert!(sent.is_none());
        assert_eq!(room.messages().await.len(), before);
        room.leave().await;
    }

    #[tokio::test]
    async fn test_send_rejects_oversized_bodies() {
        let (room, auth) = room();
        sign_in(&auth).await;
        room.join("Nighthawk").await.unwrap();

        let oversized = "x".repeat(MAX_MESSAGE_LEN + 1);
        let err = room.send_message(&oversized).await.unwrap_err();
        assert!(matches!(err, GamerMindError::Chat(_)));
        room.leave().await;
    }

    #[tokio::test]
    async fn test_sign_out_drops_the_room_behind_the_gate() {
        let (room, auth) = room();
        sign_in(&auth).await;
        room.join("Nighthawk").await.unwrap();

        auth.logout().await.unwrap();

        assert_eq!(room.state().await, RoomState::Unauthenticated);
        let err = room.send_message("hello").await.unwrap_err();
        assert!(matches!(err, GamerMindError::Chat(_)));
        room.leave().await;
    }

    #[tokio::test]
    async fn test_leave_returns_to_nickname_prompt() {
        let (room, auth) = room();
        sign_in(&auth).await;
        room.join("Nighthawk").await.unwrap();

        room.leave().await;

        assert_eq!(room.state().await, RoomState::Unjoined);
        // Re-joining after a leave works and announces again.
        let state = room.join("Nighthawk").await.unwrap();
        assert!(state.is_joined());
        room.leave().await;
    }

    #[tokio::test]
    async fn test_online_count_is_fixed() {
        let (room, _auth) = room();
        assert_eq!(room.online_count(), SIMULATED_ONLINE_COUNT);
    }
}
