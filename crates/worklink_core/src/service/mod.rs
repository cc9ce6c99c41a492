//! Operation and classification layer.
//!
//! # Responsibility
//! - Orchestrate the two-step lookup-and-link flow over the store contract.
//! - Wrap store sentinels with call-site context while preserving the cause.
//! - Classify wrapped failures into caller-facing behavior.
//!
//! # Invariants
//! - Context annotation is diagnostics-only; behavior branches on the typed
//!   sentinel reached through the `source()` chain.

pub mod assign_service;
pub mod classify;
