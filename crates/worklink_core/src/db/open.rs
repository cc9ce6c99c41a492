//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections from explicit configuration.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.
//! - There is no hidden process-wide session: the composition root opens the
//!   connection once and passes it down explicitly.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Connection options recognized by the store bootstrap.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database file path. `None` selects a private in-memory database.
    pub path: Option<PathBuf>,
    /// Upper bound on waiting for a locked database before a call fails.
    pub busy_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Opens a SQLite database file and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with_config(&DbConfig {
        path: Some(path.as_ref().to_path_buf()),
        ..DbConfig::default()
    })
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_with_config(&DbConfig::default())
}

/// Opens a database using explicit [`DbConfig`] options.
pub fn open_db_with_config(config: &DbConfig) -> DbResult<Connection> {
    let mode = if config.path.is_some() { "file" } else { "memory" };
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = open_and_bootstrap(config);
    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}

fn open_and_bootstrap(config: &DbConfig) -> DbResult<Connection> {
    let mut conn = match &config.path {
        Some(path) => Connection::open(path)?,
        None => Connection::open_in_memory()?,
    };
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(config.busy_timeout)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}
