//! Failure classification over wrapped store errors.
//!
//! # Responsibility
//! - Walk a wrap chain down to the store sentinel and map it to caller-facing
//!   behavior.
//! - Log each classified failure exactly once, at the right severity.
//!
//! # Invariants
//! - Classification inspects only the typed sentinel, never the annotation
//!   text, so any number of contextual layers yields the same result.

use crate::repo::assignment_repo::StoreError;
use crate::service::assign_service::AssignError;
use log::{error, info, warn};
use std::error::Error;

/// Caller-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The user or the task does not exist. Expected; not retryable.
    MissingPrerequisite,
    /// The user is already in the task's assignment list. Safe to ignore.
    AlreadyLinked,
    /// Driver, storage or data-integrity fault. Retryable; should alert.
    Infrastructure,
}

impl FailureKind {
    /// Message suitable for surfacing to an end user.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingPrerequisite => "project or user not found",
            Self::AlreadyLinked => "user is already assigned to this project",
            Self::Infrastructure => "database failure, please retry later",
        }
    }

    /// Whether callers wanting idempotent link semantics may treat the
    /// failure as success.
    pub fn is_ignorable(self) -> bool {
        matches!(self, Self::AlreadyLinked)
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Infrastructure)
    }
}

/// Classifies a failure by walking its `source()` chain to the store
/// sentinel.
///
/// The chain may be arbitrarily deep; every layer between the caller and the
/// sentinel is contextual annotation and is skipped. A chain with no store
/// sentinel in it is treated as an infrastructure fault.
pub fn classify(err: &(dyn Error + 'static)) -> FailureKind {
    let mut current = Some(err);
    while let Some(layer) = current {
        if let Some(sentinel) = layer.downcast_ref::<StoreError>() {
            return match sentinel {
                StoreError::NotFound => FailureKind::MissingPrerequisite,
                StoreError::Duplicate => FailureKind::AlreadyLinked,
                StoreError::Db(_) | StoreError::InvalidData(_) => FailureKind::Infrastructure,
            };
        }
        current = layer.source();
    }
    FailureKind::Infrastructure
}

/// Classifies and logs one failed assign operation.
///
/// Expected outcomes log at info/warn; infrastructure faults log at error so
/// they alert. The full annotation chain goes into the log line, keeping the
/// diagnostic context without influencing the branch taken.
pub fn classify_and_log(err: &AssignError) -> FailureKind {
    let kind = classify(err);
    match kind {
        FailureKind::MissingPrerequisite => {
            warn!("event=assign module=service status=failed kind=missing_prerequisite error={err}: {source}",
                source = render_chain(err));
        }
        FailureKind::AlreadyLinked => {
            info!("event=assign module=service status=skipped kind=already_linked error={err}: {source}",
                source = render_chain(err));
        }
        FailureKind::Infrastructure => {
            error!("event=assign module=service status=error kind=infrastructure error={err}: {source}",
                source = render_chain(err));
        }
    }
    kind
}

fn render_chain(err: &(dyn Error + 'static)) -> String {
    let mut parts = Vec::new();
    let mut current = err.source();
    while let Some(layer) = current {
        parts.push(layer.to_string());
        current = layer.source();
    }
    parts.join(": ")
}
