//! Report submission service.
//!
//! This module provides the `ReportService` which validates and files
//! moderation tickets for feed messages. Submission is simulated behind a
//! latency the same way the auth flows are.

use gamermind_core::config::GamerMindConfig;
use gamermind_core::error::{GamerMindError, Result};
use gamermind_core::report::{ReportReason, ReportTicket};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Service for filing moderation reports against chat messages.
///
/// Tickets are retained in memory for the lifetime of the process; nothing
/// is forwarded anywhere. Detail text is required when the reason is
/// `Other`, and that check runs before the simulated submission delay so
/// an invalid form never appears to be "sending".
pub struct ReportService {
    /// Simulated network latency for submission
    latency: Duration,
    /// Tickets filed this run, oldest first
    tickets: RwLock<Vec<ReportTicket>>,
}

impl ReportService {
    /// Creates a service with timing taken from the application config.
    pub fn new(config: &GamerMindConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.report_latency_ms),
            tickets: RwLock::new(Vec::new()),
        }
    }

    /// Files a report against a message.
    ///
    /// # Arguments
    ///
    /// * `message_id` - Id of the reported feed message
    /// * `author` - Author name of the reported message
    /// * `reason` - Selected report reason
    /// * `detail` - Free-text detail; trimmed, empty collapses to `None`
    /// * `cancel` - Token that aborts the pending submission
    ///
    /// # Returns
    ///
    /// * `Ok(ticket)` - The filed ticket
    /// * `Err(Report)` - The reason requires detail and none was given
    /// * `Err(Cancelled)` - The token was cancelled during the delay
    pub async fn submit(
        &self,
        message_id: &str,
        author: &str,
        reason: ReportReason,
        detail: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<ReportTicket> {
        let detail = detail
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if reason.requires_detail() && detail.is_none() {
            return Err(GamerMindError::report(
                "additional detail is required for this reason",
            ));
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(GamerMindError::Cancelled),
            _ = tokio::time::sleep(self.latency) => {}
        }

        let ticket = ReportTicket::new(message_id, author, reason, detail);
        self.tickets.write().await.push(ticket.clone());
        tracing::info!(
            target: "gamermind::report",
            ticket_id = %ticket.id,
            reason = %ticket.reason,
            "Report submitted"
        );
        Ok(ticket)
    }

    /// Returns the tickets filed this run, oldest first.
    pub async fn tickets(&self) -> Vec<ReportTicket> {
        self.tickets.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service() -> ReportService {
        ReportService::new(&GamerMindConfig {
            report_latency_ms: 0,
            ..GamerMindConfig::default()
        })
    }

    #[tokio::test]
    async fn test_submit_files_a_ticket() {
        let service = fast_service();
        let cancel = CancellationToken::new();

        let ticket = service
            .submit("msg-1", "Nighthawk", ReportReason::Spam, None, &cancel)
            .await
            .unwrap();

        assert_eq!(ticket.message_id, "msg-1");
        assert_eq!(ticket.author, "Nighthawk");
        assert_eq!(ticket.reason, ReportReason::Spam);
        assert!(ticket.detail.is_none());

        let tickets = service.tickets().await;
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, ticket.id);
    }

    #[tokio::test]
    async fn test_other_reason_requires_detail() {
        let service = fast_service();
        let cancel = CancellationToken::new();

        let err = service
            .submit("msg-1", "Nighthawk", ReportReason::Other, None, &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, GamerMindError::Report(_)));
        assert!(service.tickets().await.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_detail_does_not_satisfy_other() {
        let service = fast_service();
        let cancel = CancellationToken::new();

        let err = service
            .submit(
                "msg-1",
                "Nighthawk",
                ReportReason::Other,
                Some("   ".to_string()),
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, GamerMindError::Report(_)));
    }

    #[tokio::test]
    async fn test_other_with_detail_is_accepted() {
        let service = fast_service();
        let cancel = CancellationToken::new();

        let ticket = service
            .submit(
                "msg-1",
                "Nighthawk",
                ReportReason::Other,
                Some("  linked to an off-platform scam  ".to_string()),
                &cancel,
            )
            .await
            .unwrap();

        assert_eq!(
            ticket.detail.as_deref(),
            Some("linked to an off-platform scam")
        );
    }

    #[tokio::test]
    async fn test_cancelled_during_delay_files_nothing() {
        let service = ReportService::new(&GamerMindConfig {
            report_latency_ms: 5_000,
            ..GamerMindConfig::default()
        });
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = service
            .submit("msg-1", "Nighthawk", ReportReason::Harassment, None, &cancel)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(service.tickets().await.is_empty());
    }

    #[tokio::test]
    async fn test_tickets_accumulate_in_order() {
        let service = fast_service();
        let cancel = CancellationToken::new();

        service
            .submit("msg-1", "A", ReportReason::Spam, None, &cancel)
            .await
            .unwrap();
        service
            .submit("msg-2", "B", ReportReason::Threats, None, &cancel)
            .await
            .unwrap();

        let tickets = service.tickets().await;
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].message_id, "msg-1");
        assert_eq!(tickets[1].message_id, "msg-2");
    }
}
