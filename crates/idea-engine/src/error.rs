//! Engine error taxonomy
//!
//! Four classes of failure, none fatal:
//! - transport/agent failure: the gateway call rejected or reported failure
//! - unparseable payload: the call succeeded but no payload was recovered
//! - validation failure: rejected locally before any network call
//! - storage failure: never surfaces here at all (the ledger/counter layer
//!   degrades to defaults and logs)

use crate::gateway::GatewayError;
use crate::schedule::ScheduleError;
use idea_model::CampaignId;

/// Errors surfaced to the user by engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Gateway call itself failed
    #[error("agent call failed: {0}")]
    Transport(#[from] GatewayError),

    /// Gateway answered but flagged the run as failed
    #[error("the agent reported a failure; please try again")]
    AgentFailure,

    /// Reply arrived but no payload could be recovered from it
    #[error("the agent returned an unexpected format; please try again")]
    UnexpectedFormat,

    /// Send attempted without any recipients
    #[error("enter at least one recipient email address")]
    MissingRecipients,

    /// Send attempted with an empty in-flight idea set
    #[error("no ideas to send; generate ideas first")]
    NoIdeas,

    /// Resend/export referenced an unknown campaign
    #[error("campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    /// Schedule service call failed
    #[error("schedule call failed: {0}")]
    Schedule(#[from] ScheduleError),
}

impl EngineError {
    /// Whether this failure happened before any network call
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRecipients | Self::NoIdeas | Self::CampaignNotFound(_)
        )
    }

    /// Whether retrying the same operation could help
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::AgentFailure | Self::UnexpectedFormat | Self::Schedule(_)
        )
    }
}
