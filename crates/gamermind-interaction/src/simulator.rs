use crate::feed::ChatFeed;
use crate::{notices, personas};
use gamermind_core::chat::ChatMessage;
use gamermind_core::config::GamerMindConfig;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Background driver that keeps the simulated room alive.
///
/// Two independent loops run once started:
///
/// - a notice loop that posts a random wellness notice every notice period
/// - a bot loop that wakes every bot period and, with the configured
///   probability, posts a random line from a random persona
///
/// The simulator is one-shot: `shutdown` cancels both loops and waits for
/// them to finish, after which the instance cannot be restarted.
pub struct ChatSimulator {
    /// Feed the loops append into.
    feed: ChatFeed,
    notice_period: Duration,
    bot_period: Duration,
    bot_reply_probability: f64,
    /// Cancellation signal shared with both loops.
    cancel: CancellationToken,
    /// Guard against double-started loops appending duplicates.
    running: AtomicBool,
    /// Handles for the spawned loops, awaited on shutdown.
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ChatSimulator {
    /// Creates a simulator with timing taken from the application config.
    pub fn new(feed: ChatFeed, config: &GamerMindConfig) -> Self {
        Self::with_periods(
            feed,
            Duration::from_secs(config.notice_period_secs),
            Duration::from_secs(config.bot_period_secs),
            config.bot_reply_probability,
        )
    }

    /// Creates a simulator with explicit periods.
    ///
    /// # Arguments
    ///
    /// * `feed` - Feed handle the loops append into
    /// * `notice_period` - Interval between wellness notices
    /// * `bot_period` - Interval between bot reply attempts
    /// * `bot_reply_probability` - Chance in `0.0..=1.0` that a bot
    ///   attempt actually posts a line
    pub fn with_periods(
        feed: ChatFeed,
        notice_period: Duration,
        bot_period: Duration,
        bot_reply_probability: f64,
    ) -> Self {
        Self {
            feed,
            notice_period,
            bot_period,
            bot_reply_probability,
            cancel: CancellationToken::new(),
            running: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Starts the notice and bot loops.
    ///
    /// Calling `start` on an already-running simulator is a no-op.
    pub async fn start(&self) {
        // Prevent multiple loop instances
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::warn!(
                target: "gamermind::simulator",
                "Simulator already running, skipping"
            );
            return;
        }

        let notice_task = self.spawn_notice_loop();
        let bot_task = self.spawn_bot_loop();

        let mut tasks = self.tasks.lock().await;
        tasks.push(notice_task);
        tasks.push(bot_task);
    }

    fn spawn_notice_loop(&self) -> JoinHandle<()> {
        let feed = self.feed.clone();
        let cancel = self.cancel.clone();
        let period = self.notice_period;

        tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first tick resolves immediately; consume it so the
            // opening notice lands one full period after start.
            ticker.tick().await;
            tracing::info!(
                target: "gamermind::simulator",
                "Notice loop started ({:?} interval)",
                period
            );

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let body = {
                            let mut rng = rand::thread_rng();
                            notices::random_notice(&mut rng)
                        };
                        feed.append(ChatMessage::notice(body)).await;
                        tracing::debug!(target: "gamermind::simulator", "Posted wellness notice");
                    }
                }
            }

            tracing::info!(target: "gamermind::simulator", "Notice loop stopped");
        })
    }

    fn spawn_bot_loop(&self) -> JoinHandle<()> {
        let feed = self.feed.clone();
        let cancel = self.cancel.clone();
        let period = self.bot_period;
        let probability = self.bot_reply_probability;

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await;
            tracing::info!(
                target: "gamermind::simulator",
                "Bot loop started ({:?} interval, p={})",
                period,
                probability
            );

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        // Rng is picked up per tick so it is never held
                        // across an await point.
                        let reply = {
                            let mut rng = rand::thread_rng();
                            if rng.gen_bool(probability) {
                                let persona = personas::random_persona(&mut rng);
                                Some((persona, persona.random_line(&mut rng)))
                            } else {
                                None
                            }
                        };

                        if let Some((persona, line)) = reply {
                            feed.append(ChatMessage::bot(persona.name, line, persona.color)).await;
                            tracing::debug!(
                                target: "gamermind::simulator",
                                author = persona.name,
                                "Posted bot reply"
                            );
                        }
                    }
                }
            }

            tracing::info!(target: "gamermind::simulator", "Bot loop stopped");
        })
    }

    /// Returns `true` while the loops are running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Cancels both loops and waits for them to finish.
    ///
    /// Safe to call more than once.
    pub async fn shutdown(&self) {
        self.cancel.cancel();

        let mut tasks = self.tasks.lock().await;
        for handle in tasks.drain(..) {
            if let Err(e) = handle.await {
                tracing::warn!(target: "gamermind::simulator", "Loop task failed: {}", e);
            }
        }

        self.running.store(false, Ordering::SeqCst);
    }
}
