//! Explainable candidate screening for hospitality hiring.
//!
//! The core of the crate is the [`screening`] module: a deterministic keyword
//! scoring engine with per-criterion explanations, a concierge outreach script
//! generator, and a session-scoped audit trail that exports as CSV. The
//! [`scheduling`] module supplies the mock concierge call slots and the
//! confirmation document used by the candidate-facing flow.

pub mod config;
pub mod error;
pub mod scheduling;
pub mod screening;
pub mod telemetry;
