//! Durable campaign state
//!
//! - [`store`]: string-keyed durable storage seam with in-memory and
//!   file-backed implementations
//! - [`ledger`]: the ordered campaign ledger with merge-on-send semantics
//! - [`counter`]: the monthly sent counter with calendar rollover
//! - [`projection`]: read-only filtered views for display
//!
//! Durability here is best-effort by design: loads degrade to empty state on
//! any corruption and persist failures are logged and swallowed. Nothing in
//! this crate can fail fatally on a storage problem.

#![allow(missing_docs)]

pub mod counter;
pub mod ledger;
pub mod projection;
pub mod store;

pub use counter::{MonthlyCounter, CURRENT_MONTH_KEY, MONTHLY_COUNT_KEY};
pub use ledger::{recipient_count, CampaignLedger, SendMerge, CAMPAIGNS_KEY};
pub use projection::{categories, filter_campaigns, with_samples, ALL_CATEGORIES};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
