//! Message report domain model.
//!
//! Reporting flags a feed message for moderation review. The flow is
//! simulated end to end; tickets never leave the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Represents why a message was reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportReason {
    Harassment,
    Spam,
    Inappropriate,
    Threats,
    Hate,
    Impersonation,
    Other,
}

impl ReportReason {
    /// Human-readable label for selection prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Harassment => "Harassment or Bullying",
            Self::Spam => "Spam or Unwanted Content",
            Self::Inappropriate => "Inappropriate Content",
            Self::Threats => "Threats or Violence",
            Self::Hate => "Hate Speech",
            Self::Impersonation => "Impersonation",
            Self::Other => "Other",
        }
    }

    /// Whether this reason requires a free-text description.
    pub fn requires_detail(&self) -> bool {
        matches!(self, Self::Other)
    }
}

/// A submitted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTicket {
    /// Unique ticket identifier (UUID format)
    pub id: String,
    /// Identifier of the reported message
    pub message_id: String,
    /// Display name of the reported author
    pub author: String,
    /// Selected reason
    pub reason: ReportReason,
    /// Free-text description (required when reason is `Other`)
    pub detail: Option<String>,
    /// Timestamp when the report was submitted
    pub submitted_at: DateTime<Utc>,
}

impl ReportTicket {
    /// Creates a ticket for the given message.
    pub fn new(
        message_id: impl Into<String>,
        author: impl Into<String>,
        reason: ReportReason,
        detail: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message_id: message_id.into(),
            author: author.into(),
            reason,
            detail,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_seven_reasons_are_defined() {
        assert_eq!(ReportReason::iter().count(), 7);
    }

    #[test]
    fn test_only_other_requires_detail() {
        for reason in ReportReason::iter() {
            assert_eq!(reason.requires_detail(), reason == ReportReason::Other);
        }
    }

    #[test]
    fn test_reason_parses_from_snake_case_id() {
        let reason: ReportReason = "harassment".parse().unwrap();
        assert_eq!(reason, ReportReason::Harassment);
        assert_eq!(reason.label(), "Harassment or Bullying");
    }
}
