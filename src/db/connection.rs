use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use crate::error::{DevotrackError, ErrorCode};

use super::migrations;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "DEVOTRACK_HOME";

/// Directory holding the database and config: `$DEVOTRACK_HOME`, or the
/// platform data directory.
pub fn data_dir() -> Result<PathBuf, DevotrackError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    dirs::data_dir()
        .map(|d| d.join("devotrack"))
        .ok_or_else(|| {
            DevotrackError::new(
                ErrorCode::NotInitialized,
                format!("No data directory available. Set {HOME_ENV}."),
            )
        })
}

/// Get the path to the devotrack database.
pub fn db_path() -> Result<PathBuf, DevotrackError> {
    Ok(data_dir()?.join("devotrack.db"))
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf, DevotrackError> {
    Ok(data_dir()?.join("config.json"))
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db() -> Result<Connection, DevotrackError> {
    let path = db_path()?;
    if !path.exists() {
        return Err(DevotrackError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Initialize the database: create directories, database, and run migrations.
pub fn init_db() -> Result<PathBuf, DevotrackError> {
    let path = db_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path)
}

fn configure_connection(conn: &Connection) -> Result<(), DevotrackError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
