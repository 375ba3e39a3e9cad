//! Email delivery receipts
//!
//! The email agent's acknowledgement of a send, after envelope
//! normalization. All fields are already coerced; zero/empty values mean the
//! agent did not supply that detail and local fallbacks apply.

use serde::{Deserialize, Serialize};

/// Normalized reply from the email-sending agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailReceipt {
    /// Whether the agent reported the email as sent
    pub email_sent: bool,
    /// Recipient count per the agent (0 when unreported)
    pub recipient_count: u64,
    /// Subject line per the agent (empty when unreported)
    pub subject_line: String,
    /// Free-form delivery status text
    pub delivery_status: String,
    /// Delivery timestamp string
    pub sent_at: String,
}

impl EmailReceipt {
    /// Recipient count if the agent reported one
    #[inline]
    #[must_use]
    pub fn reported_recipient_count(&self) -> Option<usize> {
        (self.recipient_count > 0).then(|| self.recipient_count as usize)
    }

    /// Subject line if the agent reported one
    #[inline]
    #[must_use]
    pub fn reported_subject_line(&self) -> Option<&str> {
        (!self.subject_line.is_empty()).then_some(self.subject_line.as_str())
    }

    /// Delivery timestamp if the agent reported one
    #[inline]
    #[must_use]
    pub fn reported_sent_at(&self) -> Option<&str> {
        (!self.sent_at.is_empty()).then_some(self.sent_at.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_empty_fields_are_unreported() {
        let receipt = EmailReceipt {
            email_sent: true,
            recipient_count: 0,
            subject_line: String::new(),
            delivery_status: "queued".into(),
            sent_at: String::new(),
        };

        assert_eq!(receipt.reported_recipient_count(), None);
        assert_eq!(receipt.reported_subject_line(), None);
        assert_eq!(receipt.reported_sent_at(), None);
    }

    #[test]
    fn reported_fields_pass_through() {
        let receipt = EmailReceipt {
            email_sent: true,
            recipient_count: 45,
            subject_line: "Ideas".into(),
            delivery_status: "delivered".into(),
            sent_at: "2026-02-17T09:15:00Z".into(),
        };

        assert_eq!(receipt.reported_recipient_count(), Some(45));
        assert_eq!(receipt.reported_subject_line(), Some("Ideas"));
        assert_eq!(receipt.reported_sent_at(), Some("2026-02-17T09:15:00Z"));
    }
}
