//! Ideas: one actionable automation suggestion each
//!
//! Field names follow the agent payload contract (snake_case on the wire and
//! at rest). All coercion to these shapes happens at the envelope boundary;
//! downstream code can rely on the declared types.

use crate::id::IdeaId;
use serde::{Deserialize, Serialize};

/// One generated automation idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// Locally generated identifier
    pub id: IdeaId,
    /// Short idea title
    pub title: String,
    /// Prompt the user could hand to a builder agent
    pub prompt_suggestion: String,
    /// Tools/integrations involved, in suggested order
    #[serde(default)]
    pub tools: Vec<String>,
    /// Estimated weekly time savings, non-negative
    #[serde(default)]
    pub hours_saved_per_week: f64,
    /// Business category ("General" when the agent supplied none)
    #[serde(default = "default_category")]
    pub category: String,
    /// One-sentence benefit statement
    #[serde(default)]
    pub benefit_statement: String,
}

fn default_category() -> String {
    "General".to_string()
}

impl Idea {
    /// Create an idea with a fresh id and the given title
    ///
    /// Remaining fields start at their defaults; useful for tests and
    /// sample-data construction.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: IdeaId::new(),
            title: title.into(),
            prompt_suggestion: String::new(),
            tools: Vec::new(),
            hours_saved_per_week: 0.0,
            category: default_category(),
            benefit_statement: String::new(),
        }
    }

    /// With prompt suggestion
    #[inline]
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_suggestion = prompt.into();
        self
    }

    /// With tools
    #[inline]
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    /// With weekly hours saved
    #[inline]
    #[must_use]
    pub fn with_hours_saved(mut self, hours: f64) -> Self {
        self.hours_saved_per_week = hours;
        self
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// With benefit statement
    #[inline]
    #[must_use]
    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefit_statement = benefit.into();
        self
    }

    /// Return a copy with a freshly generated id
    ///
    /// Used when a historical campaign is loaded for resending, so the
    /// in-flight set never aliases ledger-owned ids.
    #[must_use]
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: IdeaId::new(),
            ..self.clone()
        }
    }

    /// Apply a user edit to one field
    pub fn apply(&mut self, edit: IdeaEdit) {
        match edit {
            IdeaEdit::Title(v) => self.title = v,
            IdeaEdit::PromptSuggestion(v) => self.prompt_suggestion = v,
            IdeaEdit::BenefitStatement(v) => self.benefit_statement = v,
        }
    }
}

/// User-editable idea fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaEdit {
    /// Replace the title
    Title(String),
    /// Replace the prompt suggestion
    PromptSuggestion(String),
    /// Replace the benefit statement
    BenefitStatement(String),
}
