//! Aggregator error types.
//!
//! The codec, adapter contract, and reactive layer are resilience-first:
//! malformed input degrades rather than erroring, per the propagation
//! policy they document themselves. This crate's `Error` exists for the
//! narrow set of genuinely exceptional, constructor-time conditions that
//! aren't "malformed user input," following the one-enum-per-crate,
//! `#[from]`-per-sibling pattern the rest of this workspace uses.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No platform adapter is available in this host environment. The
    /// shipped [`crate::browser_query_state`] binding never raises this
    /// (it degrades to `qstate_dom::NullAdapter` instead), but the variant
    /// exists for a stricter adapter (or an application's own) that wants
    /// to signal true misconfiguration rather than silently going inert.
    #[error("no platform adapter is available in this environment")]
    NoPlatformAdapter,

    #[error("navigation failed: {0}")]
    Navigation(#[from] qstate_adapter::AdapterError),
}
