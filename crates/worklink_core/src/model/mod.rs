//! Domain records for the user/task assignment flow.
//!
//! # Responsibility
//! - Define the canonical record shapes shared with pre-existing store data.
//!
//! # Invariants
//! - Field names (`userid`, `phone`, `job`, `category`, `proj`, `userids`)
//!   match the external schema contract verbatim.

pub mod task;
pub mod user;

pub use task::TaskSchema;
pub use user::UserSchema;
