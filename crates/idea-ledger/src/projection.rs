//! Read-only ledger projections
//!
//! Pure functions over a ledger snapshot; nothing here mutates state. The
//! display layer recomputes these on every filter change.

use idea_model::{sample_campaigns, CampaignRecord};
use std::collections::BTreeSet;

/// Category filter value that matches every record
pub const ALL_CATEGORIES: &str = "all";

/// Filter a snapshot by search term and category
///
/// The search term is a case-insensitive substring match against the
/// subject line, any idea title, or any prompt text; blank terms match
/// everything. The category must equal some contained idea's category
/// exactly, with [`ALL_CATEGORIES`] as the wildcard. Both filters AND.
/// Input order (newest first) is preserved.
#[must_use]
pub fn filter_campaigns<'a>(
    records: &'a [CampaignRecord],
    search: &str,
    category: &str,
) -> Vec<&'a CampaignRecord> {
    let term = search.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            let text_match = term.is_empty()
                || record.subject_line.to_lowercase().contains(&term)
                || record.ideas.iter().any(|idea| {
                    idea.title.to_lowercase().contains(&term)
                        || idea.prompt_suggestion.to_lowercase().contains(&term)
                });
            let category_match = category == ALL_CATEGORIES
                || record.ideas.iter().any(|idea| idea.category == category);
            text_match && category_match
        })
        .collect()
}

/// Sorted unique categories across a snapshot (for filter dropdowns)
#[must_use]
pub fn categories(records: &[CampaignRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.ideas.iter())
        .filter(|idea| !idea.category.is_empty())
        .map(|idea| idea.category.as_str())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Effective history view: sample campaigns prepended when enabled
///
/// This is the single place the sample-data fallback is applied; display
/// code never re-derives it.
#[must_use]
pub fn with_samples(records: &[CampaignRecord], include_samples: bool) -> Vec<CampaignRecord> {
    if include_samples {
        let mut combined = sample_campaigns();
        combined.extend_from_slice(records);
        combined
    } else {
        records.to_vec()
    }
}
