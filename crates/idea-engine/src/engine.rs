//! The Idea Engine session
//!
//! Owns all session state explicitly (in-flight ideas, subject line,
//! recipients, generation status, the captured session date) and drives the
//! two request/response cycles:
//!
//! 1. **Generate**: manager agent, envelope normalizer, then an in-flight
//!    batch plus a `generated` ledger record for today
//! 2. **Send**: local validation, email agent, receipt normalizer, then
//!    counter increment and ledger merge
//!
//! A failed cycle never mutates state; the caller is expected to prevent two
//! cycles of the same kind from being in flight at once (single-session
//! model, no internal locking).

use crate::compose::{compose_email_message, GENERATE_INSTRUCTION};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::gateway::AgentGateway;
use chrono::{NaiveDate, Utc};
use idea_envelope::{parse_email_receipt, parse_idea_batch};
use idea_ledger::{
    categories, filter_campaigns, recipient_count, with_samples, CampaignLedger, KeyValueStore,
    MonthlyCounter, SendMerge,
};
use idea_model::{
    month_key, sample_ideas, CampaignId, CampaignRecord, Idea, IdeaEdit,
    SAMPLE_MONTHLY_SENT_OFFSET, SAMPLE_SUBJECT_LINE,
};
use std::sync::Arc;

/// Where today's campaign stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    /// Nothing generated yet this session
    #[default]
    Pending,
    /// Ideas generated, awaiting send
    Generated,
    /// Campaign sent
    Sent,
}

/// Outcome of a successful generate cycle
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    /// Ideas now in flight
    pub idea_count: usize,
    /// Suggested subject line
    pub subject_line: String,
    /// Combined weekly hours saved across the batch
    pub total_hours_saved: f64,
}

/// Outcome of a successful send cycle
#[derive(Debug, Clone, PartialEq)]
pub struct SendSummary {
    /// Recipients the campaign went to (receipt value or local count)
    pub recipient_count: usize,
    /// Ideas charged to the monthly counter
    pub idea_count: usize,
    /// Delivery status text, when the receipt carried one
    pub delivery_status: Option<String>,
    /// Which ledger merge path the send took
    pub merge: SendMerge,
}

/// Effective dashboard state with the sample fallback applied
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Ideas to display (samples when enabled and nothing is in flight)
    pub ideas: Vec<Idea>,
    /// Subject line to display
    pub subject_line: String,
    /// Status badge to display
    pub status: GenerationStatus,
    /// Ideas sent this month (sample offset applied when enabled)
    pub monthly_sent: u64,
    /// Combined weekly hours saved across the displayed ideas
    pub total_hours_saved: f64,
}

/// One user session of the idea engine
pub struct IdeaEngine {
    config: EngineConfig,
    gateway: Arc<dyn AgentGateway>,
    store: Arc<dyn KeyValueStore>,
    ledger: CampaignLedger,
    counter: MonthlyCounter,
    today: NaiveDate,

    // In-flight session state
    ideas: Vec<Idea>,
    subject_line: String,
    recipient_emails: String,
    cc_emails: String,
    status: GenerationStatus,
    session_id: Option<String>,
}

impl IdeaEngine {
    /// Create a session dated today (UTC)
    #[must_use]
    pub fn new(
        config: EngineConfig,
        gateway: Arc<dyn AgentGateway>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self::with_today(config, gateway, store, Utc::now().date_naive())
    }

    /// Create a session with an explicit date
    ///
    /// The date is captured once and used for the whole session: the merge
    /// rule matches campaigns on this date even if the wall clock crosses
    /// midnight between a generate and its send.
    #[must_use]
    pub fn with_today(
        config: EngineConfig,
        gateway: Arc<dyn AgentGateway>,
        store: Arc<dyn KeyValueStore>,
        today: NaiveDate,
    ) -> Self {
        let ledger = CampaignLedger::load(store.as_ref());
        let mut counter = MonthlyCounter::load(store.as_ref());
        counter.reconcile(&month_key(today), store.as_ref());

        tracing::info!(
            %today,
            campaigns = ledger.len(),
            monthly_sent = counter.count(),
            "session started"
        );

        Self {
            config,
            gateway,
            store,
            ledger,
            counter,
            today,
            ideas: Vec::new(),
            subject_line: String::new(),
            recipient_emails: String::new(),
            cc_emails: String::new(),
            status: GenerationStatus::Pending,
            session_id: None,
        }
    }

    /// Generate a fresh idea batch for today
    ///
    /// On success the in-flight state is replaced and a `generated` record
    /// is appended for today. On any failure the prior in-flight state is
    /// left untouched.
    pub async fn generate(&mut self) -> Result<GenerateSummary, EngineError> {
        tracing::info!(agent = %self.config.manager_agent_id, "generate cycle started");

        let reply = self
            .gateway
            .invoke(GENERATE_INSTRUCTION, &self.config.manager_agent_id)
            .await?;
        if let Some(session_id) = &reply.session_id {
            self.session_id = Some(session_id.clone());
        }
        if !reply.success {
            tracing::warn!("generate cycle: agent reported failure");
            return Err(EngineError::AgentFailure);
        }

        let batch = parse_idea_batch(&reply)
            .filter(|batch| !batch.is_empty())
            .ok_or(EngineError::UnexpectedFormat)?;

        let summary = GenerateSummary {
            idea_count: batch.len(),
            subject_line: batch.subject_line.clone(),
            total_hours_saved: batch.total_hours_saved(),
        };

        self.ideas = batch.ideas.clone();
        self.subject_line = batch.subject_line.clone();
        self.status = GenerationStatus::Generated;

        self.ledger.append(CampaignRecord::generated(
            self.today,
            batch.ideas,
            batch.subject_line,
        ));
        self.ledger.persist(self.store.as_ref());

        tracing::info!(count = summary.idea_count, "generate cycle complete");
        Ok(summary)
    }

    /// Send the in-flight ideas as an email campaign
    ///
    /// Validation failures return before any network call. On agent success
    /// the counter is incremented (even when the receipt is unparseable) and
    /// the ledger merges the send; on transport/agent failure nothing
    /// mutates.
    pub async fn send(&mut self) -> Result<SendSummary, EngineError> {
        if self.recipient_emails.trim().is_empty() {
            return Err(EngineError::MissingRecipients);
        }
        if self.ideas.is_empty() {
            return Err(EngineError::NoIdeas);
        }

        tracing::info!(agent = %self.config.email_agent_id, "send cycle started");

        let message = compose_email_message(
            &self.ideas,
            &self.recipient_emails,
            &self.subject_line,
            &self.cc_emails,
        );
        let reply = self
            .gateway
            .invoke(&message, &self.config.email_agent_id)
            .await?;
        if let Some(session_id) = &reply.session_id {
            self.session_id = Some(session_id.clone());
        }
        if !reply.success {
            tracing::warn!("send cycle: agent reported failure");
            return Err(EngineError::AgentFailure);
        }

        // Null receipt is tolerated: local fallbacks cover every field.
        let receipt = parse_email_receipt(&reply);
        if receipt.is_none() {
            tracing::debug!("send receipt unparseable, using local fallbacks");
        }

        self.status = GenerationStatus::Sent;

        let idea_count = self.ideas.len();
        self.counter.increment(idea_count as u64, self.store.as_ref());

        let merge = self.ledger.upsert_on_send(
            self.today,
            &self.ideas,
            &self.recipient_emails,
            &self.subject_line,
            receipt.as_ref(),
        );
        self.ledger.persist(self.store.as_ref());

        let sent_to = receipt
            .as_ref()
            .and_then(idea_model::EmailReceipt::reported_recipient_count)
            .unwrap_or_else(|| recipient_count(&self.recipient_emails));
        let delivery_status = receipt
            .map(|r| r.delivery_status)
            .filter(|status| !status.is_empty());

        tracing::info!(recipients = sent_to, ideas = idea_count, ?merge, "send cycle complete");
        Ok(SendSummary {
            recipient_count: sent_to,
            idea_count,
            delivery_status,
            merge,
        })
    }

    /// Replace the recipient list (raw comma-separated string)
    pub fn set_recipients(&mut self, recipients: impl Into<String>) {
        self.recipient_emails = recipients.into();
    }

    /// Replace the CC list
    pub fn set_cc(&mut self, cc: impl Into<String>) {
        self.cc_emails = cc.into();
    }

    /// Replace the subject line
    pub fn set_subject_line(&mut self, subject: impl Into<String>) {
        self.subject_line = subject.into();
    }

    /// Edit one field of an in-flight idea; false when the id is unknown
    pub fn update_idea(&mut self, id: idea_model::IdeaId, edit: IdeaEdit) -> bool {
        match self.ideas.iter_mut().find(|idea| idea.id == id) {
            Some(idea) => {
                idea.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Remove an in-flight idea; false when the id is unknown
    pub fn remove_idea(&mut self, id: idea_model::IdeaId) -> bool {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        self.ideas.len() != before
    }

    /// Load a historical campaign back into the in-flight state
    ///
    /// Ideas are cloned with fresh ids; subject and recipients come from
    /// the record, and the status returns to `Generated` so the campaign
    /// can be reviewed and re-sent.
    pub fn load_for_resend(&mut self, id: CampaignId) -> Result<(), EngineError> {
        let record = self
            .ledger
            .find(id)
            .ok_or(EngineError::CampaignNotFound(id))?;

        self.ideas = record.ideas.iter().map(Idea::with_fresh_id).collect();
        self.subject_line = record.subject_line.clone();
        self.recipient_emails = record.recipient_emails.clone();
        self.status = GenerationStatus::Generated;

        tracing::info!(campaign = %id, ideas = self.ideas.len(), "campaign loaded for resend");
        Ok(())
    }

    /// Load today's pending campaign, if one exists
    ///
    /// Lets a fresh session pick up where an earlier generate left off; the
    /// subsequent send then transitions that same record.
    pub fn load_todays_pending(&mut self) -> bool {
        let Some(id) = self
            .ledger
            .records()
            .iter()
            .find(|record| record.is_pending_for(self.today))
            .map(|record| record.id)
        else {
            return false;
        };
        self.load_for_resend(id).is_ok()
    }

    /// Plain-text export of a historical campaign
    pub fn clipboard_text(&self, id: CampaignId) -> Result<String, EngineError> {
        self.ledger
            .find(id)
            .map(idea_model::campaign_text)
            .ok_or(EngineError::CampaignNotFound(id))
    }

    /// Effective dashboard state, with sample fallbacks when enabled
    #[must_use]
    pub fn dashboard_view(&self, show_samples: bool) -> DashboardView {
        let ideas = if show_samples && self.ideas.is_empty() {
            sample_ideas()
        } else {
            self.ideas.clone()
        };
        let subject_line = if show_samples && self.subject_line.is_empty() {
            SAMPLE_SUBJECT_LINE.to_string()
        } else {
            self.subject_line.clone()
        };
        let status = if show_samples && self.status == GenerationStatus::Pending {
            GenerationStatus::Generated
        } else {
            self.status
        };
        let monthly_sent = if show_samples {
            self.counter.count() + SAMPLE_MONTHLY_SENT_OFFSET
        } else {
            self.counter.count()
        };
        let total_hours_saved = ideas.iter().map(|idea| idea.hours_saved_per_week).sum();

        DashboardView {
            ideas,
            subject_line,
            status,
            monthly_sent,
            total_hours_saved,
        }
    }

    /// Filtered campaign history, newest first
    #[must_use]
    pub fn history(
        &self,
        search: &str,
        category: &str,
        show_samples: bool,
    ) -> Vec<CampaignRecord> {
        let combined = with_samples(self.ledger.records(), show_samples);
        filter_campaigns(&combined, search, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Sorted unique categories across the (possibly sample-extended) history
    #[must_use]
    pub fn history_categories(&self, show_samples: bool) -> Vec<String> {
        categories(&with_samples(self.ledger.records(), show_samples))
    }

    /// In-flight ideas
    #[inline]
    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// In-flight subject line
    #[inline]
    #[must_use]
    pub fn subject_line(&self) -> &str {
        &self.subject_line
    }

    /// Session status
    #[inline]
    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Ideas sent this calendar month
    #[inline]
    #[must_use]
    pub fn monthly_sent(&self) -> u64 {
        self.counter.count()
    }

    /// The session's captured date
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Last gateway session id, when one was reported
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// All campaign records, newest first
    #[inline]
    #[must_use]
    pub fn campaigns(&self) -> &[CampaignRecord] {
        self.ledger.records()
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for IdeaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeaEngine")
            .field("today", &self.today)
            .field("status", &self.status)
            .field("ideas", &self.ideas.len())
            .field("campaigns", &self.ledger.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayError, MockAgentGateway};
    use idea_envelope::AgentReply;
    use idea_ledger::MemoryStore;
    use idea_model::CampaignStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn batch_reply() -> AgentReply {
        AgentReply::ok(json!({
            "ideas": [
                {"title": "Invoice Pipeline", "category": "Finance", "hours_saved_per_week": 10},
                {"title": "Trend Spotter", "category": "Marketing", "hours_saved_per_week": 5},
            ],
            "campaign_subject_line": "Two ideas",
            "generation_date": "2026-02-17T08:00:00Z",
            "total_ideas": 2
        }))
        .with_session("sess-1")
    }

    fn engine_with(
        gateway: MockAgentGateway,
        store: Arc<MemoryStore>,
        today: &str,
    ) -> IdeaEngine {
        IdeaEngine::with_today(
            EngineConfig::default(),
            Arc::new(gateway),
            store,
            day(today),
        )
    }

    #[tokio::test]
    async fn generate_sets_in_flight_state_and_appends_record() {
        let mut gateway = MockAgentGateway::new();
        gateway
            .expect_invoke()
            .times(1)
            .returning(|_, _| Ok(batch_reply()));
        let store = Arc::new(MemoryStore::new());
        let mut engine = engine_with(gateway, store.clone(), "2026-02-17");

        let summary = engine.generate().await.unwrap();

        assert_eq!(summary.idea_count, 2);
        assert_eq!(summary.subject_line, "Two ideas");
        assert_eq!(summary.total_hours_saved, 15.0);

        assert_eq!(engine.status(), GenerationStatus::Generated);
        assert_eq!(engine.ideas().len(), 2);
        assert_eq!(engine.subject_line(), "Two ideas");
        assert_eq!(engine.session_id(), Some("sess-1"));

        let records = engine.campaigns();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CampaignStatus::Generated);
        assert_eq!(records[0].date, day("2026-02-17"));

        // persisted through the store as well
        assert!(store
            .get(idea_ledger::CAMPAIGNS_KEY)
            .unwrap()
            .unwrap()
            .contains("Invoice Pipeline"));
    }

    #[tokio::test]
    async fn generate_failure_leaves_prior_state_untouched() {
        let mut gateway = MockAgentGateway::new();
        let mut calls = 0;
        gateway.expect_invoke().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(batch_reply())
            } else {
                Ok(AgentReply::ok(json!("unparseable")))
            }
        });
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");

        engine.generate().await.unwrap();
        let err = engine.generate().await.unwrap_err();

        assert!(matches!(err, EngineError::UnexpectedFormat));
        // first batch still in flight, ledger unchanged beyond first append
        assert_eq!(engine.ideas().len(), 2);
        assert_eq!(engine.campaigns().len(), 1);
        assert_eq!(engine.status(), GenerationStatus::Generated);
    }

    #[tokio::test]
    async fn generate_agent_reported_failure_is_transport_class() {
        let mut gateway = MockAgentGateway::new();
        gateway
            .expect_invoke()
            .returning(|_, _| Ok(AgentReply::failed()));
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");

        let err = engine.generate().await.unwrap_err();
        assert!(matches!(err, EngineError::AgentFailure));
        assert!(engine.campaigns().is_empty());
    }

    #[tokio::test]
    async fn send_validates_before_any_network_call() {
        let mut gateway = MockAgentGateway::new();
        gateway.expect_invoke().never();
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");

        // no recipients at all
        let err = engine.send().await.unwrap_err();
        assert!(matches!(err, EngineError::MissingRecipients));

        // recipients but no ideas
        engine.set_recipients("a@x.com");
        let err = engine.send().await.unwrap_err();
        assert!(matches!(err, EngineError::NoIdeas));

        assert_eq!(engine.monthly_sent(), 0);
    }

    #[tokio::test]
    async fn send_transitions_todays_record_and_charges_counter() {
        let mut gateway = MockAgentGateway::new();
        let mut calls = 0;
        gateway.expect_invoke().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(batch_reply())
            } else {
                // receipt with nothing reported: local fallbacks apply
                Ok(AgentReply::ok(json!({"email_sent": true})))
            }
        });
        let store = Arc::new(MemoryStore::new());
        let mut engine = engine_with(gateway, store.clone(), "2026-02-17");

        engine.generate().await.unwrap();
        engine.set_recipients("a@x.com, b@x.com");
        let summary = engine.send().await.unwrap();

        assert_eq!(summary.merge, SendMerge::Transitioned);
        assert_eq!(summary.recipient_count, 2);
        assert_eq!(summary.idea_count, 2);
        assert_eq!(summary.delivery_status, None);

        // exactly one record for the date, now sent
        let records = engine.campaigns();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CampaignStatus::Sent);
        assert_eq!(records[0].recipient_count, 2);

        // counter charged with the batch's idea count and persisted
        assert_eq!(engine.monthly_sent(), 2);
        assert_eq!(
            store.get(idea_ledger::MONTHLY_COUNT_KEY).unwrap().as_deref(),
            Some("2")
        );
        assert_eq!(
            store.get(idea_ledger::CURRENT_MONTH_KEY).unwrap().as_deref(),
            Some("2026-02")
        );
        assert_eq!(engine.status(), GenerationStatus::Sent);
    }

    #[tokio::test]
    async fn send_uses_receipt_values_when_reported() {
        let mut gateway = MockAgentGateway::new();
        let mut calls = 0;
        gateway.expect_invoke().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(batch_reply())
            } else {
                Ok(AgentReply::ok(json!({
                    "email_sent": true,
                    "recipient_count": 45,
                    "subject_line": "Agent subject",
                    "delivery_status": "delivered",
                    "sent_at": "2026-02-17T09:15:00Z"
                })))
            }
        });
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");

        engine.generate().await.unwrap();
        engine.set_recipients("a@x.com");
        let summary = engine.send().await.unwrap();

        assert_eq!(summary.recipient_count, 45);
        assert_eq!(summary.delivery_status.as_deref(), Some("delivered"));

        let record = &engine.campaigns()[0];
        assert_eq!(record.recipient_count, 45);
        assert_eq!(record.subject_line, "Agent subject");
        assert_eq!(record.sent_at.as_deref(), Some("2026-02-17T09:15:00Z"));
    }

    #[tokio::test]
    async fn send_transport_failure_mutates_nothing() {
        let mut gateway = MockAgentGateway::new();
        let mut calls = 0;
        gateway.expect_invoke().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(batch_reply())
            } else {
                Err(GatewayError::Request(make_reqwest_error()))
            }
        });
        let store = Arc::new(MemoryStore::new());
        let mut engine = engine_with(gateway, store.clone(), "2026-02-17");

        engine.generate().await.unwrap();
        engine.set_recipients("a@x.com");
        let err = engine.send().await.unwrap_err();

        assert!(matches!(err, EngineError::Transport(_)));
        assert_eq!(engine.status(), GenerationStatus::Generated);
        assert_eq!(engine.monthly_sent(), 0);
        assert_eq!(engine.campaigns()[0].status, CampaignStatus::Generated);
        assert_eq!(store.get(idea_ledger::MONTHLY_COUNT_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn send_without_prior_generate_appends_new_record() {
        let mut gateway = MockAgentGateway::new();
        gateway
            .expect_invoke()
            .times(1)
            .returning(|_, _| Ok(AgentReply::ok(json!({"email_sent": true}))));
        let store = Arc::new(MemoryStore::new());

        // ledger seeded with yesterday's campaign only
        {
            let mut ledger = CampaignLedger::default();
            ledger.append(CampaignRecord::generated(
                day("2026-02-16"),
                vec![Idea::new("old")],
                "yesterday",
            ));
            ledger.persist(store.as_ref());
        }

        let mut engine = engine_with(gateway, store, "2026-02-17");
        engine.load_for_resend(engine.campaigns()[0].id).unwrap();
        engine.set_recipients("a@x.com");
        let summary = engine.send().await.unwrap();

        // yesterday's pending record is not today's: a new sent record appears
        assert_eq!(summary.merge, SendMerge::Appended);
        assert_eq!(engine.campaigns().len(), 2);
        assert_eq!(engine.campaigns()[0].status, CampaignStatus::Sent);
        assert_eq!(engine.campaigns()[0].date, day("2026-02-17"));
    }

    #[test]
    fn update_and_remove_ideas_touch_only_their_target() {
        let gateway = MockAgentGateway::new();
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");
        engine.ideas = vec![Idea::new("a"), Idea::new("b")];
        let first = engine.ideas[0].id;
        let second = engine.ideas[1].id;

        assert!(engine.update_idea(first, IdeaEdit::Title("edited".into())));
        assert_eq!(engine.ideas()[0].title, "edited");
        assert_eq!(engine.ideas()[1].title, "b");

        assert!(engine.remove_idea(second));
        assert_eq!(engine.ideas().len(), 1);
        assert!(!engine.remove_idea(second));
        assert!(!engine.update_idea(second, IdeaEdit::Title("gone".into())));
    }

    #[test]
    fn load_for_resend_clones_with_fresh_ids() {
        let gateway = MockAgentGateway::new();
        let store = Arc::new(MemoryStore::new());
        {
            let mut ledger = CampaignLedger::default();
            ledger.append(CampaignRecord::sent(
                day("2026-02-16"),
                vec![Idea::new("historic")],
                3,
                "x@y.com",
                "old subject",
                "2026-02-16T08:30:00Z",
            ));
            ledger.persist(store.as_ref());
        }
        let mut engine = engine_with(gateway, store, "2026-02-17");
        let record_id = engine.campaigns()[0].id;
        let historic_idea_id = engine.campaigns()[0].ideas[0].id;

        engine.load_for_resend(record_id).unwrap();

        assert_eq!(engine.status(), GenerationStatus::Generated);
        assert_eq!(engine.subject_line(), "old subject");
        assert_eq!(engine.ideas().len(), 1);
        assert_ne!(engine.ideas()[0].id, historic_idea_id);

        let missing = CampaignId::new();
        assert!(matches!(
            engine.load_for_resend(missing),
            Err(EngineError::CampaignNotFound(_))
        ));
    }

    #[test]
    fn dashboard_view_applies_sample_fallbacks_per_field() {
        let gateway = MockAgentGateway::new();
        let mut engine = engine_with(gateway, Arc::new(MemoryStore::new()), "2026-02-17");

        let plain = engine.dashboard_view(false);
        assert!(plain.ideas.is_empty());
        assert_eq!(plain.status, GenerationStatus::Pending);
        assert_eq!(plain.monthly_sent, 0);

        let sampled = engine.dashboard_view(true);
        assert_eq!(sampled.ideas.len(), 5);
        assert_eq!(sampled.subject_line, SAMPLE_SUBJECT_LINE);
        assert_eq!(sampled.status, GenerationStatus::Generated);
        assert_eq!(sampled.monthly_sent, SAMPLE_MONTHLY_SENT_OFFSET);
        assert!(sampled.total_hours_saved > 0.0);

        // real in-flight ideas win over samples
        engine.ideas = vec![Idea::new("real")];
        engine.subject_line = "real subject".into();
        let mixed = engine.dashboard_view(true);
        assert_eq!(mixed.ideas.len(), 1);
        assert_eq!(mixed.subject_line, "real subject");
    }

    #[test]
    fn history_merges_samples_and_filters() {
        let gateway = MockAgentGateway::new();
        let store = Arc::new(MemoryStore::new());
        {
            let mut ledger = CampaignLedger::default();
            ledger.append(CampaignRecord::generated(
                day("2026-02-17"),
                vec![Idea::new("real idea").with_category("Ops")],
                "real campaign",
            ));
            ledger.persist(store.as_ref());
        }
        let engine = engine_with(gateway, store, "2026-02-17");

        assert_eq!(engine.history("", "all", false).len(), 1);
        assert_eq!(engine.history("", "all", true).len(), 4);
        assert_eq!(engine.history("", "Ops", true).len(), 1);
        assert_eq!(engine.history("real campaign", "all", true).len(), 1);

        let cats = engine.history_categories(true);
        assert!(cats.contains(&"Ops".to_string()));
        assert!(cats.contains(&"Finance".to_string()));

        assert_eq!(engine.history_categories(false), vec!["Ops"]);
    }

    #[tokio::test]
    async fn load_todays_pending_picks_up_earlier_generate() {
        let gateway = MockAgentGateway::new();
        let store = Arc::new(MemoryStore::new());
        {
            let mut ledger = CampaignLedger::default();
            ledger.append(CampaignRecord::generated(
                day("2026-02-17"),
                vec![Idea::new("pending")],
                "pending subject",
            ));
            ledger.persist(store.as_ref());
        }
        let mut engine = engine_with(gateway, store, "2026-02-17");

        assert!(engine.load_todays_pending());
        assert_eq!(engine.subject_line(), "pending subject");
        assert_eq!(engine.ideas().len(), 1);

        let empty = MockAgentGateway::new();
        let mut other = engine_with(empty, Arc::new(MemoryStore::new()), "2026-02-17");
        assert!(!other.load_todays_pending());
    }

    #[test]
    fn month_rollover_happens_at_session_start() {
        let gateway = MockAgentGateway::new();
        let store = Arc::new(
            MemoryStore::new()
                .with_entry(idea_ledger::MONTHLY_COUNT_KEY, "40")
                .with_entry(idea_ledger::CURRENT_MONTH_KEY, "2026-01"),
        );
        let engine = engine_with(gateway, store.clone(), "2026-02-17");

        assert_eq!(engine.monthly_sent(), 0);
        assert_eq!(
            store.get(idea_ledger::CURRENT_MONTH_KEY).unwrap().as_deref(),
            Some("2026-02")
        );
    }

    // reqwest::Error cannot be constructed directly; provoke one
    fn make_reqwest_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("http://[invalid-url")
            .build()
            .expect_err("invalid url must fail to build")
    }
}
