//! Lookup-and-link use-case service.
//!
//! # Responsibility
//! - Find the user, find the task, then append the user id to the task's
//!   assignment list.
//! - Wrap each store sentinel with static context at the exact failure point
//!   and return immediately.
//!
//! # Invariants
//! - Fail-fast: the task collection is never touched when the user lookup
//!   fails, and the push never runs before both lookups succeed.
//! - Wrapping preserves the sentinel as `Error::source`, so classification
//!   works regardless of how many layers a caller adds on top.

use crate::repo::assignment_repo::{
    AssignmentStore, StoreError, TASKS_COLL, USERIDS_COLL, USERS_COLL,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Logical database name rendered into diagnostic context.
pub const DATABASE: &str = "worklink";

/// Store failure wrapped with the context of the step that hit it.
///
/// `Display` renders the human-readable annotation; `source()` exposes the
/// raw sentinel for classification. The annotation must never be parsed for
/// branching.
#[derive(Debug)]
pub enum AssignError {
    FindUser { phone: String, source: StoreError },
    FindTask { proj: String, source: StoreError },
    LinkUser {
        proj: String,
        userid: String,
        source: StoreError,
    },
}

impl Display for AssignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FindUser { phone, .. } => write!(
                f,
                "[db:{DATABASE} coll:{USERS_COLL} find phone: {phone} failed]"
            ),
            Self::FindTask { proj, .. } => write!(
                f,
                "[db:{DATABASE} coll:{TASKS_COLL} find proj: {proj} failed]"
            ),
            Self::LinkUser { proj, userid, .. } => write!(
                f,
                "[db:{DATABASE} coll:{USERIDS_COLL} insert userid: {userid} proj: {proj} failed]"
            ),
        }
    }
}

impl Error for AssignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FindUser { source, .. }
            | Self::FindTask { source, .. }
            | Self::LinkUser { source, .. } => Some(source),
        }
    }
}

/// Use-case service linking users into a task's assignment list.
pub struct AssignService<S: AssignmentStore> {
    store: S,
}

impl<S: AssignmentStore> AssignService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Links the user identified by `phone` into the task identified by
    /// `proj`.
    ///
    /// # Contract
    /// - Returns on the first failing step with that step's context wrapped
    ///   around the store sentinel.
    /// - Performs no mutation unless both lookups succeeded.
    /// - A repeated link surfaces the store's `Duplicate` sentinel; the
    ///   assignment list never holds the same userid twice.
    ///
    /// Failures are not logged here: callers log exactly once after
    /// classifying, so one failure never produces a log line per layer.
    pub fn assign_task_to_user(&self, phone: &str, proj: &str) -> Result<(), AssignError> {
        let user = self
            .store
            .find_user_by_phone(phone)
            .map_err(|source| AssignError::FindUser {
                phone: phone.to_string(),
                source,
            })?;

        let task = self
            .store
            .find_task_by_proj(proj)
            .map_err(|source| AssignError::FindTask {
                proj: proj.to_string(),
                source,
            })?;

        self.store
            .push_user_id(&task.proj, &user.userid)
            .map_err(|source| AssignError::LinkUser {
                proj: task.proj.clone(),
                userid: user.userid.clone(),
                source,
            })?;

        info!(
            "event=assign module=service status=ok phone={phone} proj={} userid={}",
            task.proj, user.userid
        );
        Ok(())
    }
}
