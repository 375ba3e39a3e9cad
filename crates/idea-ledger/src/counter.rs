//! Monthly sent counter
//!
//! Tracks cumulative ideas sent in the current calendar month. The counter
//! persists as two independent string keys (decimal count, `YYYY-MM` month)
//! but the pair is always written in the same persist call so a load never
//! observes a count detached from its month.

use crate::store::KeyValueStore;

/// Storage key for the decimal count
pub const MONTHLY_COUNT_KEY: &str = "idea-engine-monthly-count";
/// Storage key for the `YYYY-MM` month
pub const CURRENT_MONTH_KEY: &str = "idea-engine-current-month";

/// Cumulative ideas sent this calendar month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCounter {
    count: u64,
    month: String,
}

impl MonthlyCounter {
    /// Load the counter, defaulting to `{0, ""}` on any read failure
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let count = store
            .get(MONTHLY_COUNT_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let month = store
            .get(CURRENT_MONTH_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self { count, month }
    }

    /// Roll the counter over if the calendar month changed
    ///
    /// Called once per session start. On a month change the count resets to
    /// 0 and the new month is persisted immediately; a matching month leaves
    /// the counter untouched.
    pub fn reconcile(&mut self, now_month: &str, store: &dyn KeyValueStore) {
        if self.month != now_month {
            tracing::info!(from = %self.month, to = %now_month, "monthly counter rollover");
            self.count = 0;
            self.month = now_month.to_string();
            self.persist(store);
        }
    }

    /// Add sent ideas to the reconciled count and persist both fields
    pub fn increment(&mut self, by: u64, store: &dyn KeyValueStore) {
        self.count += by;
        self.persist(store);
    }

    /// Current count
    #[inline]
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current month key (`YYYY-MM`, empty before first reconcile)
    #[inline]
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Write count and month together, best effort
    fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(err) = store.set(MONTHLY_COUNT_KEY, &self.count.to_string()) {
            tracing::warn!(%err, "monthly count persist failed");
            return;
        }
        if let Err(err) = store.set(CURRENT_MONTH_KEY, &self.month) {
            tracing::warn!(%err, "current month persist failed");
        }
    }
}
