//! Assignment store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide single find/insert operations over `users`, `tasks` and the
//!   `userids` assignment list.
//! - Map driver failures to the sentinel taxonomy callers branch on.
//!
//! # Invariants
//! - A find that matches zero rows returns `StoreError::NotFound`, never a
//!   generic failure.
//! - A push blocked by the UNIQUE(proj, userid) constraint returns
//!   `StoreError::Duplicate`.
//! - Errors leave this layer unwrapped; context is added above.

use crate::db::DbError;
use crate::model::{TaskSchema, UserSchema};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Collection names as they exist in the store. Used verbatim in diagnostic
/// context so log lines match the actual schema.
pub const USERS_COLL: &str = "users";
pub const TASKS_COLL: &str = "tasks";
pub const USERIDS_COLL: &str = "userids";

pub type StoreResult<T> = Result<T, StoreError>;

/// Sentinel taxonomy for store access.
///
/// `NotFound` and `Duplicate` are expected outcomes a caller can branch on;
/// `Db` and `InvalidData` are infrastructure faults.
#[derive(Debug)]
pub enum StoreError {
    /// Zero rows matched a single-record find.
    NotFound,
    /// A uniqueness constraint blocked the mutation.
    Duplicate,
    /// Driver or storage failure.
    Db(DbError),
    /// A persisted row violates the schema contract.
    InvalidData(String),
}

impl StoreError {
    /// Whether this failure is part of normal control flow rather than an
    /// infrastructure fault.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound | Self::Duplicate)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Duplicate => write!(f, "duplicate key"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound | Self::Duplicate | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        if matches!(value, rusqlite::Error::QueryReturnedNoRows) {
            return Self::NotFound;
        }
        if let rusqlite::Error::SqliteFailure(code, _) = &value {
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
            {
                return Self::Duplicate;
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access contract for the lookup-and-link flow.
///
/// The trait is the injection seam: the service layer depends on it, tests
/// and the composition root choose the implementation.
pub trait AssignmentStore {
    /// Finds exactly one user by phone. `NotFound` when no user matches.
    fn find_user_by_phone(&self, phone: &str) -> StoreResult<UserSchema>;
    /// Finds exactly one task by project key, including its ordered
    /// assignment list. `NotFound` when no task matches.
    fn find_task_by_proj(&self, proj: &str) -> StoreResult<TaskSchema>;
    /// Appends a user id to a task's assignment list. `Duplicate` when the
    /// pair is already linked.
    fn push_user_id(&self, proj: &str, userid: &str) -> StoreResult<()>;
}

/// SQLite-backed assignment store borrowing a migrated connection.
pub struct SqliteAssignmentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Seeds one user record. Users are normally created by an external
    /// registration process; this exists for fixtures and the smoke driver.
    pub fn insert_user(&self, phone: &str, job: i64) -> StoreResult<UserSchema> {
        let user = UserSchema {
            userid: Uuid::new_v4().to_string(),
            phone: phone.to_string(),
            job,
        };
        self.conn.execute(
            "INSERT INTO users (userid, phone, job) VALUES (?1, ?2, ?3);",
            params![user.userid, user.phone, user.job],
        )?;
        Ok(user)
    }

    /// Seeds one task record with an empty assignment list.
    pub fn insert_task(&self, proj: &str, category: i64) -> StoreResult<TaskSchema> {
        self.conn.execute(
            "INSERT INTO tasks (proj, category) VALUES (?1, ?2);",
            params![proj, category],
        )?;
        Ok(TaskSchema {
            category,
            proj: proj.to_string(),
            userids: Vec::new(),
        })
    }

    fn load_user_ids(&self, proj: &str) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT userid FROM userids WHERE proj = ?1 ORDER BY seq ASC;")?;
        let mut rows = stmt.query([proj])?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next()? {
            ids.push(row.get("userid")?);
        }
        Ok(ids)
    }
}

impl AssignmentStore for SqliteAssignmentStore<'_> {
    fn find_user_by_phone(&self, phone: &str) -> StoreResult<UserSchema> {
        let mut stmt = self
            .conn
            .prepare("SELECT userid, phone, job FROM users WHERE phone = ?1;")?;
        let mut rows = stmt.query([phone])?;
        let Some(row) = rows.next()? else {
            return Err(StoreError::NotFound);
        };

        let user = UserSchema {
            userid: row.get("userid")?,
            phone: row.get("phone")?,
            job: row.get("job")?,
        };
        if user.userid.is_empty() {
            return Err(StoreError::InvalidData(
                "empty userid in users.userid".to_string(),
            ));
        }
        Ok(user)
    }

    fn find_task_by_proj(&self, proj: &str) -> StoreResult<TaskSchema> {
        let mut stmt = self
            .conn
            .prepare("SELECT proj, category FROM tasks WHERE proj = ?1;")?;
        let mut rows = stmt.query([proj])?;
        let Some(row) = rows.next()? else {
            return Err(StoreError::NotFound);
        };

        let proj: String = row.get("proj")?;
        let category = row.get("category")?;
        let userids = self.load_user_ids(&proj)?;
        Ok(TaskSchema {
            category,
            proj,
            userids,
        })
    }

    fn push_user_id(&self, proj: &str, userid: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO userids (proj, userid) VALUES (?1, ?2);",
            params![proj, userid],
        )?;
        Ok(())
    }
}
