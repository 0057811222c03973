//! # vc-05-bad-actor-detection
//!
//! Append-only incident ledger per (register, validator) pair, used to flag
//! validators for operator review.
//!
//! ## Severity Mapping
//!
//! | Incident | Severity |
//! |----------|----------|
//! | Docket from an unauthorized initiator | Critical |
//! | Leader impersonation | Critical |
//! | Docket with bad signature, bad hash or chain violation | High |
//! | Double vote in one term | High |
//! | Other docket rejections | Info |
//! | Transaction validation failure | Info |
//! | Invalid vote | Info |
//!
//! ## Review Rule
//!
//! A validator is flagged when, within retention, it has any Critical
//! incident, or at least two High incidents, or at least
//! `warning_threshold` incidents in total. Flagging is advisory: nothing
//! in this crate acts on it.
//!
//! Recording never fails and never blocks the caller. Incidents with a
//! blank register or validator id are logged and dropped.

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::InMemoryIncidentStore;
pub use domain::*;
pub use ports::{BadActorApi, IncidentStore};
pub use service::BadActorDetector;
