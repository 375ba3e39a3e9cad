//! Plain-text rendering of campaign content
//!
//! Used both for the email body handed to the sending agent and for
//! clipboard export of a historical campaign.

use crate::campaign::CampaignRecord;
use crate::idea::Idea;
use std::fmt::Write as _;

/// Render one idea as a numbered plain-text section
#[must_use]
pub fn idea_section(idea: &Idea, index: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Idea {}: {}", index + 1, idea.title);
    let _ = writeln!(out, "Category: {}", idea.category);
    let _ = writeln!(out, "Prompt: {}", idea.prompt_suggestion);
    let _ = writeln!(out, "Tools: {}", idea.tools.join(", "));
    let _ = writeln!(out, "Hours Saved: {}h/week", idea.hours_saved_per_week);
    let _ = write!(out, "Benefit: {}", idea.benefit_statement);
    out
}

/// Render a whole campaign for clipboard export
#[must_use]
pub fn campaign_text(record: &CampaignRecord) -> String {
    record
        .ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| idea_section(idea, i))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn section_is_numbered_from_one() {
        let idea = Idea::new("Trend Spotter")
            .with_category("Marketing")
            .with_prompt("Watch the feeds")
            .with_tools(vec!["Slack".into(), "LinkedIn".into()])
            .with_hours_saved(5.0)
            .with_benefit("Less scrolling");

        let text = idea_section(&idea, 0);
        assert!(text.starts_with("Idea 1: Trend Spotter"));
        assert!(text.contains("Category: Marketing"));
        assert!(text.contains("Tools: Slack, LinkedIn"));
        assert!(text.contains("Hours Saved: 5h/week"));
        assert!(text.ends_with("Benefit: Less scrolling"));
    }

    #[test]
    fn campaign_text_joins_with_separators() {
        let date: NaiveDate = "2026-02-17".parse().unwrap();
        let record = CampaignRecord::generated(
            date,
            vec![Idea::new("a"), Idea::new("b")],
            "subject",
        );

        let text = campaign_text(&record);
        assert!(text.contains("Idea 1: a"));
        assert!(text.contains("Idea 2: b"));
        assert_eq!(text.matches("\n\n---\n\n").count(), 1);
    }

    #[test]
    fn empty_campaign_renders_empty() {
        let date: NaiveDate = "2026-02-17".parse().unwrap();
        let record = CampaignRecord::generated(date, vec![], "subject");
        assert_eq!(campaign_text(&record), "");
    }
}
