//! Envelope normalizer
//!
//! Agent replies arrive with an unpredictable amount of wrapping: the domain
//! payload may sit directly under `response.result`, be nested one or two
//! levels deep in `{ "result": … }` envelopes, and any of those levels may be
//! a JSON-encoded string instead of a structured object. This crate unwraps
//! that shape into typed payloads:
//! - [`parse_idea_batch`] for idea-generation replies
//! - [`parse_email_receipt`] for email-send replies
//!
//! The contract is total: a parse either yields a fully-typed value or
//! `None`. Individual malformed fields degrade to safe defaults; only a
//! failed reply, an undecodable JSON string, or a non-object payload abort
//! the parse. Nothing here panics on adversarial input.

#![allow(missing_docs)]

pub mod coerce;
pub mod envelope;
pub mod parse;

pub use envelope::{AgentReply, ReplyBody};
pub use parse::{parse_email_receipt, parse_idea_batch};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
