//! Campaign records: one row in the campaign ledger
//!
//! The serialized shape of [`CampaignRecord`] is a bit-exact contract with
//! the durable store: camelCase field names, lowercase status values, and a
//! `sentAt` key present only on sent records.

use crate::id::CampaignId;
use crate::idea::Idea;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Ideas generated, not yet emailed
    Generated,
    /// Emailed to recipients
    Sent,
}

/// One campaign: a dated batch of ideas, optionally emailed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    /// Locally generated identifier, stable for the record's lifetime
    pub id: CampaignId,
    /// Calendar day the campaign belongs to (natural key for "today")
    pub date: NaiveDate,
    /// Snapshot of the ideas at generation/send time
    pub ideas: Vec<Idea>,
    /// Number of recipients the campaign went to (0 until sent)
    pub recipient_count: usize,
    /// Raw comma-separated recipient addresses, unparsed at this layer
    pub recipient_emails: String,
    /// Email subject line
    pub subject_line: String,
    /// Lifecycle status
    pub status: CampaignStatus,
    /// Delivery timestamp; present iff `status == Sent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

impl CampaignRecord {
    /// Create a freshly generated (not yet sent) campaign for `date`
    #[must_use]
    pub fn generated(date: NaiveDate, ideas: Vec<Idea>, subject_line: impl Into<String>) -> Self {
        Self {
            id: CampaignId::new(),
            date,
            ideas,
            recipient_count: 0,
            recipient_emails: String::new(),
            subject_line: subject_line.into(),
            status: CampaignStatus::Generated,
            sent_at: None,
        }
    }

    /// Create a campaign directly in sent state
    ///
    /// Used when a send arrives with no pending generated record for the
    /// date (resend of a historical campaign, or send without a prior
    /// generation this session).
    #[must_use]
    pub fn sent(
        date: NaiveDate,
        ideas: Vec<Idea>,
        recipient_count: usize,
        recipient_emails: impl Into<String>,
        subject_line: impl Into<String>,
        sent_at: impl Into<String>,
    ) -> Self {
        Self {
            id: CampaignId::new(),
            date,
            ideas,
            recipient_count,
            recipient_emails: recipient_emails.into(),
            subject_line: subject_line.into(),
            status: CampaignStatus::Sent,
            sent_at: Some(sent_at.into()),
        }
    }

    /// Transition this record to sent, replacing delivery fields
    ///
    /// Id, date, and the idea snapshot are preserved; everything else is
    /// taken from the send outcome.
    #[must_use]
    pub fn into_sent(
        self,
        recipient_count: usize,
        recipient_emails: impl Into<String>,
        subject_line: impl Into<String>,
        sent_at: impl Into<String>,
    ) -> Self {
        Self {
            recipient_count,
            recipient_emails: recipient_emails.into(),
            subject_line: subject_line.into(),
            status: CampaignStatus::Sent,
            sent_at: Some(sent_at.into()),
            ..self
        }
    }

    /// Whether this record is awaiting a send for the given date
    #[inline]
    #[must_use]
    pub fn is_pending_for(&self, date: NaiveDate) -> bool {
        self.date == date && self.status == CampaignStatus::Generated
    }
}

/// Month key (`YYYY-MM`) for a calendar date
#[inline]
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
