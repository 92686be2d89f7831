//! Application configuration model.
//!
//! Tunables for the mock auth flow and the chat simulation. Values not
//! present in the configuration file fall back to the defaults below, which
//! match the shipped behavior.

use crate::error::{GamerMindError, Result};
use crate::session::token::DEFAULT_TTL_HOURS;
use serde::{Deserialize, Serialize};

fn default_auth_latency_ms() -> u64 {
    1000
}

fn default_report_latency_ms() -> u64 {
    1500
}

fn default_session_ttl_hours() -> i64 {
    DEFAULT_TTL_HOURS
}

fn default_notice_period_secs() -> u64 {
    30
}

fn default_bot_period_secs() -> u64 {
    45
}

fn default_bot_reply_probability() -> f64 {
    0.3
}

/// Runtime configuration for the application.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GamerMindConfig {
    /// Simulated network delay for login/register, in milliseconds
    #[serde(default = "default_auth_latency_ms")]
    pub auth_latency_ms: u64,
    /// Simulated network delay for report submission, in milliseconds
    #[serde(default = "default_report_latency_ms")]
    pub report_latency_ms: u64,
    /// Session token lifetime, in hours
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
    /// Period of the canned notice timer, in seconds
    #[serde(default = "default_notice_period_secs")]
    pub notice_period_secs: u64,
    /// Period of the bot response timer, in seconds
    #[serde(default = "default_bot_period_secs")]
    pub bot_period_secs: u64,
    /// Probability that a bot replies on a given timer tick
    #[serde(default = "default_bot_reply_probability")]
    pub bot_reply_probability: f64,
}

impl Default for GamerMindConfig {
    fn default() -> Self {
        Self {
            auth_latency_ms: default_auth_latency_ms(),
            report_latency_ms: default_report_latency_ms(),
            session_ttl_hours: default_session_ttl_hours(),
            notice_period_secs: default_notice_period_secs(),
            bot_period_secs: default_bot_period_secs(),
            bot_reply_probability: default_bot_reply_probability(),
        }
    }
}

impl GamerMindConfig {
    /// Checks that the configuration values are usable.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: All values are within their valid ranges
    /// - `Err(GamerMindError::Config)`: A value is out of range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bot_reply_probability) {
            return Err(GamerMindError::config(format!(
                "bot_reply_probability must be between 0.0 and 1.0, got {}",
                self.bot_reply_probability
            )));
        }
        if self.session_ttl_hours <= 0 {
            return Err(GamerMindError::config(
                "session_ttl_hours must be positive",
            ));
        }
        if self.notice_period_secs == 0 || self.bot_period_secs == 0 {
            return Err(GamerMindError::config("timer periods must be non-zero"));
        }
        Ok(())
    }
}
