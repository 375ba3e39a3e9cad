//! Typed parse entry points
//!
//! Both payload kinds run the identical unwrap algorithm, parameterized only
//! by the key that signals "this is already the payload": `ideas` for
//! generation replies, `email_sent` for send replies.

use crate::coerce::{count_or_zero, number_or_zero, string_list, string_or, truthy};
use crate::envelope::{unwrap_payload, AgentReply};
use chrono::Utc;
use idea_model::{EmailReceipt, Idea, IdeaBatch, IdeaId};
use serde_json::Value;

/// Parse an idea-generation reply into a batch
///
/// Returns `None` only when the reply failed outright or no object payload
/// could be recovered; malformed idea fields degrade per field.
#[must_use]
pub fn parse_idea_batch(reply: &AgentReply) -> Option<IdeaBatch> {
    let data = unwrap_payload(reply, "ideas")?;

    let ideas: Vec<Idea> = data
        .get("ideas")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(coerce_idea).collect())
        .unwrap_or_default();

    let subject_line = string_or(data.get("campaign_subject_line"), "");
    let generated_at = timestamp_or_now(data.get("generation_date"));
    let declared = count_or_zero(data.get("total_ideas")) as usize;
    let declared_total = if declared == 0 { ideas.len() } else { declared };

    tracing::debug!(count = ideas.len(), declared_total, "parsed idea batch");

    Some(IdeaBatch {
        ideas,
        subject_line,
        generated_at,
        declared_total,
    })
}

/// Parse an email-send reply into a delivery receipt
#[must_use]
pub fn parse_email_receipt(reply: &AgentReply) -> Option<EmailReceipt> {
    let data = unwrap_payload(reply, "email_sent")?;

    Some(EmailReceipt {
        email_sent: truthy(data.get("email_sent")),
        recipient_count: count_or_zero(data.get("recipient_count")),
        subject_line: string_or(data.get("subject_line"), ""),
        delivery_status: string_or(data.get("delivery_status"), ""),
        sent_at: timestamp_or_now(data.get("sent_at")),
    })
}

/// One idea from an untrusted payload element; every field degrades alone
fn coerce_idea(value: &Value) -> Idea {
    Idea {
        id: IdeaId::new(),
        title: string_or(value.get("title"), ""),
        prompt_suggestion: string_or(value.get("prompt_suggestion"), ""),
        tools: string_list(value.get("tools")),
        hours_saved_per_week: number_or_zero(value.get("hours_saved_per_week")),
        category: string_or(value.get("category"), "General"),
        benefit_statement: string_or(value.get("benefit_statement"), ""),
    }
}

fn timestamp_or_now(value: Option<&Value>) -> String {
    let supplied = string_or(value, "");
    if supplied.is_empty() {
        Utc::now().to_rfc3339()
    } else {
        supplied
    }
}
