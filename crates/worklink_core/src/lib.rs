//! Core lookup-and-link logic for worklink.
//!
//! The flow is three layers deep: the store returns raw sentinel errors
//! (`NotFound`, `Duplicate`, infrastructure), the service wraps them with
//! call-site context while preserving the cause, and the classifier walks the
//! chain back down to decide caller-facing behavior.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, open_db_with_config, DbConfig, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{TaskSchema, UserSchema};
pub use repo::assignment_repo::{
    AssignmentStore, SqliteAssignmentStore, StoreError, StoreResult,
};
pub use service::assign_service::{AssignError, AssignService};
pub use service::classify::{classify, classify_and_log, FailureKind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
