//! Idea Engine domain model
//!
//! Pure data types shared across the workspace:
//! - Ideas and generated idea batches
//! - Campaign records and their lifecycle
//! - Email delivery receipts
//! - Sample data and plain-text rendering
//!
//! This crate performs no I/O; durability and orchestration live in
//! `idea-ledger` and `idea-engine`.

#![allow(missing_docs)]

pub mod batch;
pub mod campaign;
pub mod id;
pub mod idea;
pub mod receipt;
pub mod samples;
pub mod text;

pub use batch::IdeaBatch;
pub use campaign::{month_key, CampaignRecord, CampaignStatus};
pub use id::{CampaignId, IdeaId};
pub use idea::{Idea, IdeaEdit};
pub use receipt::EmailReceipt;
pub use samples::{
    sample_campaigns, sample_ideas, SAMPLE_MONTHLY_SENT_OFFSET, SAMPLE_SUBJECT_LINE,
};
pub use text::{campaign_text, idea_section};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
