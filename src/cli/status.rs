use serde_json::json;

use crate::error::DevotrackError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    match run_inner(json_output) {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(json_output: bool) -> Result<i32, DevotrackError> {
    let engine = super::open_engine()?;
    let summary = engine.summary();
    let progress = engine.progress();

    if json_output {
        super::print_json(json!({
            "summary": output::json::summary_json(&summary),
            "progress": progress,
        }));
    } else {
        output::text::print_summary(&summary, progress.current_week_start);
        println!("\nTasks:");
        output::text::print_task_list(&progress.weekly_tasks);
    }
    Ok(0)
}
