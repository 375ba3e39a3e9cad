//! Idea Engine orchestration
//!
//! The engine that ties the workspace together:
//! - Drives the two user-triggered cycles (generate ideas, send campaign)
//!   against an [`AgentGateway`]
//! - Owns the session state (in-flight ideas, subject line, recipients)
//!   explicitly, passing it by value into ledger/counter operations
//! - Exposes read-only dashboard and history views with the sample-data
//!   fallback applied in one place
//! - Carries the collaborator seams (`AgentGateway`, `ScheduleService`) with
//!   HTTP implementations, plus engine configuration and the CLI binary
//!
//! # Example
//!
//! ```rust,ignore
//! use idea_engine::{EngineConfig, HttpAgentGateway, IdeaEngine};
//! use idea_ledger::FileStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EngineConfig::default();
//! let gateway = Arc::new(HttpAgentGateway::new(&config.gateway_url));
//! let store = Arc::new(FileStore::open(&config.storage_dir)?);
//! let mut engine = IdeaEngine::new(config, gateway, store);
//!
//! let summary = engine.generate().await?;
//! println!("generated {} ideas", summary.idea_count);
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]

pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod schedule;

pub use compose::{compose_email_message, DEFAULT_EMAIL_SUBJECT, GENERATE_INSTRUCTION};
pub use config::{ConfigError, EngineConfig};
pub use engine::{DashboardView, GenerateSummary, GenerationStatus, IdeaEngine, SendSummary};
pub use error::EngineError;
pub use gateway::{AgentGateway, GatewayError, HttpAgentGateway};
pub use schedule::{
    cron_to_human, ExecutionLog, HttpScheduleService, Schedule, ScheduleError, ScheduleService,
};

// Re-exported for callers consuming send outcomes
pub use idea_ledger::SendMerge;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the Idea Engine
    pub use crate::{
        AgentGateway, DashboardView, EngineConfig, EngineError, GenerationStatus, IdeaEngine,
        ScheduleService,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
