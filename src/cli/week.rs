use serde_json::json;

use crate::cli::commands::WeekCommands;
use crate::error::DevotrackError;
use crate::output;

pub fn run(cmd: WeekCommands, json_output: bool) -> i32 {
    let result = match cmd {
        WeekCommands::Reset => run_reset(json_output),
        WeekCommands::Day => run_day(json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_reset(json_output: bool) -> Result<i32, DevotrackError> {
    let mut engine = super::open_engine()?;
    engine.reset_weekly_progress();
    let summary = engine.summary();

    if json_output {
        super::print_json(json!({
            "current_week_start": engine.progress().current_week_start,
            "summary": output::json::summary_json(&summary),
        }));
    } else {
        println!("Started a new week at {}", engine.progress().current_week_start.to_rfc3339());
        output::text::print_summary(&summary, engine.progress().current_week_start);
    }
    Ok(0)
}

fn run_day(json_output: bool) -> Result<i32, DevotrackError> {
    let engine = super::open_engine()?;
    let day = engine.current_week_day();

    if json_output {
        super::print_json(json!({
            "day": day,
            "current_week_start": engine.progress().current_week_start,
        }));
    } else {
        println!("Day {day} of 7");
    }
    Ok(0)
}
