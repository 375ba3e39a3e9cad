//! Generated idea batches
//!
//! An [`IdeaBatch`] is the transient output of one generation cycle. It is
//! never persisted standalone; the ledger snapshots its ideas into a
//! [`crate::CampaignRecord`].

use crate::idea::Idea;
use serde::{Deserialize, Serialize};

/// Output of one idea-generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaBatch {
    /// Generated ideas, in agent order
    pub ideas: Vec<Idea>,
    /// Suggested email subject line
    pub subject_line: String,
    /// Generation timestamp as supplied by the agent (RFC 3339 expected)
    pub generated_at: String,
    /// Total the agent claimed to generate
    ///
    /// Retained for diagnostics only; `ideas.len()` is authoritative
    /// everywhere a count is displayed or charged.
    pub declared_total: usize,
}

impl IdeaBatch {
    /// Number of ideas actually present
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Whether the batch carries no ideas
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Sum of estimated weekly hours saved across all ideas
    #[must_use]
    pub fn total_hours_saved(&self) -> f64 {
        self.ideas.iter().map(|i| i.hours_saved_per_week).sum()
    }
}
