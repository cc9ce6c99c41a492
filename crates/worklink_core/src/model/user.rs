//! User domain model.
//!
//! # Invariants
//! - `userid` is assigned by the store and never reused.
//! - Records are created by an external registration process; this crate only
//!   reads them.

use serde::{Deserialize, Serialize};

/// Identity record looked up by `phone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSchema {
    /// Stable store-assigned identifier.
    pub userid: String,
    /// Lookup key for the assignment flow.
    pub phone: String,
    /// Job category code.
    pub job: i64,
}
