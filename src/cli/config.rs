use serde_json::json;

use crate::cli::commands::ConfigCommands;
use crate::config::Config;
use crate::db::connection;
use crate::error::DevotrackError;

pub fn run(cmd: ConfigCommands, json_output: bool) -> i32 {
    let result = match cmd {
        ConfigCommands::Show => run_show(json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_show(json_output: bool) -> Result<i32, DevotrackError> {
    let path = connection::config_path()?;
    let config = Config::load(&path);

    if json_output {
        super::print_json(json!({
            "path": path.to_string_lossy(),
            "config": config,
        }));
    } else {
        println!("Config: {}", path.display());
        println!("  default_xp: {}", config.default_xp);
        println!("  default_time_spent: {}", config.default_time_spent);
        println!("  log_filter: {}", config.log_filter);
    }
    Ok(0)
}
