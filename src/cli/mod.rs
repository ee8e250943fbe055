pub mod clear;
pub mod commands;
pub mod config;
pub mod game;
pub mod init;
pub mod status;
pub mod task;
pub mod week;

pub use commands::*;

use rusqlite::Connection;

use crate::db::{connection, ProgressStore};
use crate::engine::{ProgressEngine, SystemClock};
use crate::error::DevotrackError;
use crate::output;

pub type CliEngine = ProgressEngine<Connection, SystemClock>;

/// Open the database and run the load sequence.
pub fn open_engine() -> Result<CliEngine, DevotrackError> {
    let conn = connection::open_db()?;
    Ok(ProgressEngine::load(ProgressStore::new(conn, SystemClock)))
}

/// Print `value` as the JSON success envelope.
pub fn print_json(value: serde_json::Value) {
    println!("{}", output::json::to_pretty(&output::json::success(value)));
}

/// Report `e` on the channel matching the output mode. Returns the exit code.
pub fn report_error(e: &DevotrackError, json_output: bool) -> i32 {
    if json_output {
        println!("{}", output::json::to_pretty(&output::json::error(e)));
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
