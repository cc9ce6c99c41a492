//! Store access layer: raw sentinel errors, no contextual wrapping.
//!
//! # Responsibility
//! - Define the `AssignmentStore` data-access contract and its SQLite
//!   implementation.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - This layer returns distinguished sentinels (`NotFound`, `Duplicate`)
//!   alongside infrastructure errors; it never attaches call-site context.
//!   Wrapping with context is the service layer's job.

pub mod assignment_repo;
