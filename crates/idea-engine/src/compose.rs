//! Agent message composition
//!
//! The instruction sent to the manager agent and the email brief sent to the
//! email agent. Both are plain text; the email agent does its own HTML
//! formatting.

use idea_model::{idea_section, Idea};
use std::fmt::Write as _;

/// Fixed instruction for the idea-generation cycle
pub const GENERATE_INSTRUCTION: &str = "Generate 5 fresh, high-impact AI agent ideas for today. \
    Include creative tools combinations, realistic hours-saved estimates, and compelling benefit \
    statements. Focus on diverse categories across business functions.";

/// Subject used when the user never set one
pub const DEFAULT_EMAIL_SUBJECT: &str = "Daily AI Agent Ideas";

/// Build the email-campaign brief for the sending agent
#[must_use]
pub fn compose_email_message(ideas: &[Idea], recipients: &str, subject: &str, cc: &str) -> String {
    let subject = if subject.is_empty() {
        DEFAULT_EMAIL_SUBJECT
    } else {
        subject
    };

    let mut out = String::new();
    let _ = writeln!(out, "Send the following agent ideas as a nurture email campaign.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Recipients: {}", recipients.trim());
    let _ = writeln!(out, "Subject: {subject}");
    if !cc.trim().is_empty() {
        let _ = writeln!(out, "CC: {}", cc.trim());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Content to send:");

    let sections: Vec<String> = ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| idea_section(idea, i))
        .collect();
    out.push_str(&sections.join("\n---\n"));

    out.push_str(
        "\n\nFormat this as a professional HTML email with clear sections for each idea. \
         Include a call-to-action to try building these agents.",
    );
    out
}
