//! Sample dataset
//!
//! Shown by the display layer when sample mode is on and no real data
//! exists yet. Ids are regenerated on every call so sample content never
//! aliases ledger-owned records.

use crate::campaign::CampaignRecord;
use crate::idea::Idea;
use chrono::NaiveDate;

/// Added to the real monthly sent count when sample mode is on
pub const SAMPLE_MONTHLY_SENT_OFFSET: u64 = 23;

/// Subject line shown in sample mode before any real generation
pub const SAMPLE_SUBJECT_LINE: &str =
    "Top 5 AI Agent Ideas to Transform Your Workflow This Week";

/// Five representative automation ideas
#[must_use]
pub fn sample_ideas() -> Vec<Idea> {
    vec![
        Idea::new("Customer Onboarding Automator")
            .with_prompt(
                "Build an agent that sends personalized welcome emails, schedules onboarding \
                 calls, and creates CRM entries for new customers automatically.",
            )
            .with_tools(vec!["Gmail".into(), "Google Calendar".into(), "HubSpot CRM".into()])
            .with_hours_saved(8.0)
            .with_category("Customer Success")
            .with_benefit(
                "Reduces manual onboarding steps by 90%, ensuring every new customer receives \
                 a consistent, timely welcome experience.",
            ),
        Idea::new("Social Media Trend Spotter")
            .with_prompt(
                "Create an agent that monitors trending topics on X (Twitter) and LinkedIn, \
                 then drafts relevant post ideas tailored to your brand voice.",
            )
            .with_tools(vec!["Twitter API".into(), "LinkedIn".into(), "Slack".into()])
            .with_hours_saved(5.0)
            .with_category("Marketing")
            .with_benefit(
                "Stay ahead of industry conversations without manually scrolling feeds -- get \
                 curated trend alerts delivered to Slack.",
            ),
        Idea::new("Meeting Notes Summarizer")
            .with_prompt(
                "Design an agent that joins Zoom meetings, transcribes key discussion points, \
                 assigns action items, and posts summaries to Notion.",
            )
            .with_tools(vec!["Zoom".into(), "Notion".into(), "Slack".into()])
            .with_hours_saved(6.0)
            .with_category("Productivity")
            .with_benefit(
                "Never lose track of meeting decisions again. Auto-generated summaries with \
                 tagged action items keep the entire team aligned.",
            ),
        Idea::new("Invoice Processing Pipeline")
            .with_prompt(
                "Build an agent that extracts data from uploaded invoices, validates amounts, \
                 creates entries in QuickBooks, and flags anomalies for review.",
            )
            .with_tools(vec!["QuickBooks".into(), "Google Drive".into(), "Gmail".into()])
            .with_hours_saved(10.0)
            .with_category("Finance")
            .with_benefit(
                "Eliminates manual data entry for invoices, reducing processing time from 15 \
                 minutes to under 30 seconds per invoice.",
            ),
        Idea::new("Competitive Intelligence Tracker")
            .with_prompt(
                "Create an agent that monitors competitor websites, press releases, and product \
                 updates, then compiles a weekly intelligence brief.",
            )
            .with_tools(vec!["Web Scraper".into(), "Google Sheets".into(), "Gmail".into()])
            .with_hours_saved(4.0)
            .with_category("Strategy")
            .with_benefit(
                "Automated competitive monitoring ensures you never miss a market shift while \
                 freeing your team from tedious manual research.",
            ),
    ]
}

/// Three representative campaigns (two sent, one pending)
#[must_use]
pub fn sample_campaigns() -> Vec<CampaignRecord> {
    let ideas = sample_ideas();
    let day = |s: &str| s.parse::<NaiveDate>().expect("valid sample date");

    vec![
        CampaignRecord::sent(
            day("2026-02-17"),
            ideas[0..3].to_vec(),
            45,
            "team@company.com, partners@startup.io",
            "3 AI Agent Ideas to Supercharge Your Week",
            "2026-02-17T09:15:00Z",
        ),
        CampaignRecord::sent(
            day("2026-02-16"),
            ideas[2..5].to_vec(),
            38,
            "newsletter@company.com",
            "Fresh Agent Ideas: Productivity + Finance + Strategy",
            "2026-02-16T08:30:00Z",
        ),
        CampaignRecord::generated(
            day("2026-02-15"),
            ideas[0..2].to_vec(),
            "Automate Customer Success & Marketing Today",
        ),
    ]
}
