use serde_json::json;

use crate::cli::commands::TaskCommands;
use crate::config::Config;
use crate::db::connection;
use crate::engine::CompletionOutcome;
use crate::error::DevotrackError;
use crate::output;

pub fn run(cmd: TaskCommands, json_output: bool) -> i32 {
    let result = match cmd {
        TaskCommands::List => run_list(json_output),
        TaskCommands::Show { id } => run_show(id, json_output),
        TaskCommands::Complete { id, xp, time } => run_complete(id, xp, time, json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_list(json_output: bool) -> Result<i32, DevotrackError> {
    let engine = super::open_engine()?;
    let tasks = &engine.progress().weekly_tasks;

    if json_output {
        let completed = engine.progress().completed_count();
        super::print_json(json!({
            "tasks": tasks,
            "completed": completed,
            "total": tasks.len(),
        }));
    } else {
        output::text::print_task_list(tasks);
    }
    Ok(0)
}

fn run_show(id: u8, json_output: bool) -> Result<i32, DevotrackError> {
    let engine = super::open_engine()?;
    let task = engine
        .task_progress(id)
        .ok_or_else(|| DevotrackError::task_not_found(id))?;

    if json_output {
        super::print_json(json!({ "task": task }));
    } else {
        output::text::print_task(task);
    }
    Ok(0)
}

fn run_complete(
    id: u8,
    xp: Option<u32>,
    time: Option<u32>,
    json_output: bool,
) -> Result<i32, DevotrackError> {
    let config = Config::load(&connection::config_path()?);
    let xp = xp.unwrap_or(config.default_xp);
    let time = time.unwrap_or(config.default_time_spent);

    let mut engine = super::open_engine()?;
    let already_completed = match engine.complete_task(id, xp, time) {
        CompletionOutcome::Completed { already_completed } => already_completed,
        CompletionOutcome::UnknownTask => return Err(DevotrackError::task_not_found(id)),
    };
    let task = engine
        .task_progress(id)
        .ok_or_else(|| DevotrackError::task_not_found(id))?;
    let progress = engine.progress();

    if json_output {
        super::print_json(json!({
            "task": task,
            "already_completed": already_completed,
            "total_xp": progress.total_xp,
            "total_time": progress.total_time,
            "streak": output::json::streak_json(&progress.streak),
        }));
    } else {
        if already_completed {
            println!("Task {id} was already completed; totals credited again.");
        }
        println!("Completed task {id}: +{xp} XP, {time} min");
        println!("  Total: {} XP, {} min", progress.total_xp, progress.total_time);
        output::text::print_streak(&progress.streak);
    }
    Ok(0)
}
