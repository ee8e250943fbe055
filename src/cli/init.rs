use serde_json::json;

use crate::config::Config;
use crate::db::connection;
use crate::error::DevotrackError;

pub fn run(json_output: bool) -> i32 {
    match run_inner() {
        Ok((db, config)) => {
            if json_output {
                super::print_json(json!({
                    "path": db.to_string_lossy(),
                    "config": config.to_string_lossy(),
                }));
            } else {
                println!("Initialized devotrack at {}", db.display());
            }
            0
        }
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner() -> Result<(std::path::PathBuf, std::path::PathBuf), DevotrackError> {
    let db = connection::init_db()?;
    let config = connection::config_path()?;
    if !config.exists() {
        Config::default().write(&config)?;
    }
    Ok((db, config))
}
