//! Campaign ledger
//!
//! An ordered, newest-first collection of campaign records with
//! merge-on-send semantics. The ledger exclusively owns its records: reads
//! hand out shared slices, and the only mutations are head insertion and
//! whole-record transition via [`CampaignLedger::upsert_on_send`].

use crate::store::KeyValueStore;
use chrono::{NaiveDate, Utc};
use idea_model::{CampaignId, CampaignRecord, EmailReceipt, Idea};

/// Storage key for the serialized record array
pub const CAMPAIGNS_KEY: &str = "idea-engine-campaigns";

/// Which merge path a send took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMerge {
    /// An existing pending record for the date was transitioned in place
    Transitioned,
    /// No pending record existed; a new sent record was prepended
    Appended,
}

/// Ordered campaign history, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignLedger {
    records: Vec<CampaignRecord>,
}

impl CampaignLedger {
    /// Empty ledger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the ledger from durable storage
    ///
    /// Absence or corruption of the stored value degrades to an empty
    /// ledger; this never fails.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(CAMPAIGNS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                tracing::warn!(%err, "campaign store unreadable, starting empty");
                return Self::new();
            }
        };
        match serde_json::from_str::<Vec<CampaignRecord>>(&raw) {
            Ok(records) => Self { records },
            Err(err) => {
                tracing::warn!(%err, "campaign store corrupt, starting empty");
                Self::new()
            }
        }
    }

    /// Write the ledger back to durable storage, best effort
    pub fn persist(&self, store: &dyn KeyValueStore) {
        let serialized = match serde_json::to_string(&self.records) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(%err, "campaign ledger serialization failed");
                return;
            }
        };
        if let Err(err) = store.set(CAMPAIGNS_KEY, &serialized) {
            tracing::warn!(%err, "campaign ledger persist failed");
        }
    }

    /// Insert a record at the head (most recent first)
    pub fn append(&mut self, record: CampaignRecord) {
        self.records.insert(0, record);
    }

    /// Merge a completed send into the ledger
    ///
    /// Scans for a pending (`generated`) record dated `date`. If found, that
    /// record is transitioned to sent in place, keeping its position, id,
    /// and idea snapshot. Otherwise a brand-new sent record built from the
    /// in-flight `ideas` is prepended.
    ///
    /// Receipt-supplied recipient count, subject line, and timestamp win
    /// when the receipt reported them; otherwise the local fallbacks apply:
    /// the comma-count of `recipients_raw`, the in-flight `subject`, and the
    /// current time.
    pub fn upsert_on_send(
        &mut self,
        date: NaiveDate,
        ideas: &[Idea],
        recipients_raw: &str,
        subject: &str,
        receipt: Option<&EmailReceipt>,
    ) -> SendMerge {
        let count = receipt
            .and_then(EmailReceipt::reported_recipient_count)
            .unwrap_or_else(|| recipient_count(recipients_raw));
        let subject = receipt
            .and_then(EmailReceipt::reported_subject_line)
            .unwrap_or(subject)
            .to_string();
        let sent_at = receipt
            .and_then(EmailReceipt::reported_sent_at)
            .map_or_else(|| Utc::now().to_rfc3339(), str::to_string);
        let recipients = recipients_raw.trim().to_string();

        if let Some(idx) = self.records.iter().position(|r| r.is_pending_for(date)) {
            let pending = self.records[idx].clone();
            self.records[idx] = pending.into_sent(count, recipients, subject, sent_at);
            SendMerge::Transitioned
        } else {
            self.records.insert(
                0,
                CampaignRecord::sent(date, ideas.to_vec(), count, recipients, subject, sent_at),
            );
            SendMerge::Appended
        }
    }

    /// All records, newest first
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    /// Find a record by id
    #[inline]
    #[must_use]
    pub fn find(&self, id: CampaignId) -> Option<&CampaignRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Count the non-empty comma-separated entries in a raw recipient string
#[must_use]
pub fn recipient_count(raw: &str) -> usize {
    raw.split(',').filter(|entry| !entry.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use idea_model::CampaignStatus;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn receipt(count: u64, subject: &str, sent_at: &str) -> EmailReceipt {
        EmailReceipt {
            email_sent: true,
            recipient_count: count,
            subject_line: subject.into(),
            delivery_status: "delivered".into(),
            sent_at: sent_at.into(),
        }
    }

    #[test]
    fn append_inserts_at_head() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(date("2026-02-16"), vec![], "older"));
        ledger.append(CampaignRecord::generated(date("2026-02-17"), vec![], "newer"));

        assert_eq!(ledger.records()[0].subject_line, "newer");
        assert_eq!(ledger.records()[1].subject_line, "older");
    }

    #[test]
    fn upsert_transitions_pending_record_in_place() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(
            date("2026-02-17"),
            vec![Idea::new("snapshot idea")],
            "draft subject",
        ));
        ledger.append(CampaignRecord::generated(date("2026-02-18"), vec![], "other day"));
        let original_id = ledger.records()[1].id;

        let merge = ledger.upsert_on_send(
            date("2026-02-17"),
            &[Idea::new("in-flight idea")],
            "a@x.com, b@x.com",
            "final subject",
            None,
        );

        assert_eq!(merge, SendMerge::Transitioned);
        assert_eq!(ledger.len(), 2);

        // position preserved, in-flight ideas NOT copied over the snapshot
        let sent = &ledger.records()[1];
        assert_eq!(sent.id, original_id);
        assert_eq!(sent.status, CampaignStatus::Sent);
        assert_eq!(sent.ideas[0].title, "snapshot idea");
        assert_eq!(sent.recipient_count, 2);
        assert_eq!(sent.recipient_emails, "a@x.com, b@x.com");
        assert_eq!(sent.subject_line, "final subject");
        assert!(sent.sent_at.is_some());
    }

    #[test]
    fn upsert_appends_when_no_pending_record() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(date("2026-02-16"), vec![], "yesterday"));

        let merge = ledger.upsert_on_send(
            date("2026-02-17"),
            &[Idea::new("idea")],
            "a@x.com",
            "subject",
            None,
        );

        assert_eq!(merge, SendMerge::Appended);
        assert_eq!(ledger.len(), 2);

        let head = &ledger.records()[0];
        assert_eq!(head.status, CampaignStatus::Sent);
        assert_eq!(head.date, date("2026-02-17"));
        assert_eq!(head.ideas.len(), 1);
        assert_eq!(head.recipient_count, 1);
    }

    #[test]
    fn upsert_ignores_already_sent_records_for_date() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::sent(
            date("2026-02-17"),
            vec![],
            3,
            "x@y.com",
            "already out",
            "2026-02-17T08:00:00Z",
        ));

        let merge =
            ledger.upsert_on_send(date("2026-02-17"), &[], "a@x.com", "resend", None);

        assert_eq!(merge, SendMerge::Appended);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn receipt_values_override_local_fallbacks() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(date("2026-02-17"), vec![], "local subject"));

        let r = receipt(45, "agent subject", "2026-02-17T09:15:00Z");
        ledger.upsert_on_send(date("2026-02-17"), &[], "a@x.com, b@x.com", "local subject", Some(&r));

        let sent = &ledger.records()[0];
        assert_eq!(sent.recipient_count, 45);
        assert_eq!(sent.subject_line, "agent subject");
        assert_eq!(sent.sent_at.as_deref(), Some("2026-02-17T09:15:00Z"));
    }

    #[test]
    fn empty_receipt_fields_fall_back_locally() {
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(date("2026-02-17"), vec![], "unused"));

        let r = receipt(0, "", "");
        ledger.upsert_on_send(
            date("2026-02-17"),
            &[],
            " a@x.com ,, b@x.com ",
            "local subject",
            Some(&r),
        );

        let sent = &ledger.records()[0];
        assert_eq!(sent.recipient_count, 2);
        assert_eq!(sent.subject_line, "local subject");
        assert!(sent.sent_at.is_some());
    }

    #[test]
    fn recipient_count_skips_blank_entries() {
        assert_eq!(recipient_count("a@x.com, b@x.com"), 2);
        assert_eq!(recipient_count(" a@x.com ,, , b@x.com "), 2);
        assert_eq!(recipient_count(""), 0);
        assert_eq!(recipient_count(" , ,"), 0);
    }

    #[test]
    fn load_missing_and_corrupt_degrade_to_empty() {
        let store = MemoryStore::new();
        assert!(CampaignLedger::load(&store).is_empty());

        let store = MemoryStore::new().with_entry(CAMPAIGNS_KEY, "not json {{{");
        assert!(CampaignLedger::load(&store).is_empty());

        let store = MemoryStore::new().with_entry(CAMPAIGNS_KEY, r#"{"an":"object"}"#);
        assert!(CampaignLedger::load(&store).is_empty());
    }

    #[test]
    fn persist_round_trips_through_store() {
        let store = MemoryStore::new();
        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(
            date("2026-02-17"),
            vec![Idea::new("idea").with_category("Finance")],
            "subject",
        ));
        ledger.persist(&store);

        let loaded = CampaignLedger::load(&store);
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn persist_failure_is_swallowed() {
        #[derive(Debug)]
        struct BrokenStore;
        impl KeyValueStore for BrokenStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Err(StoreError::Unavailable("down".into()))
            }
            fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Unavailable("down".into()))
            }
        }

        let mut ledger = CampaignLedger::new();
        ledger.append(CampaignRecord::generated(date("2026-02-17"), vec![], "s"));
        // must not panic, and load on a broken store yields empty
        ledger.persist(&BrokenStore);
        assert!(CampaignLedger::load(&BrokenStore).is_empty());
    }
}
