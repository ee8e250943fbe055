use serde_json::json;

use crate::cli::commands::GameCommands;
use crate::error::DevotrackError;
use crate::output;

pub fn run(cmd: GameCommands, json_output: bool) -> i32 {
    let result = match cmd {
        GameCommands::Done { game_id, score } => run_done(&game_id, score, json_output),
        GameCommands::List => run_list(json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn validate_game_id(game_id: &str) -> Result<(), DevotrackError> {
    if game_id.trim().is_empty() {
        return Err(DevotrackError::validation("Game id must not be empty"));
    }
    Ok(())
}

fn run_done(game_id: &str, score: Option<f64>, json_output: bool) -> Result<i32, DevotrackError> {
    validate_game_id(game_id)?;
    if let Some(s) = score {
        if !s.is_finite() {
            return Err(DevotrackError::validation("Score must be a finite number"));
        }
    }

    let engine = super::open_engine()?;
    engine.mark_game_completed(game_id, score);
    let count = engine.completed_games().len();

    if json_output {
        super::print_json(json!({
            "game_id": game_id,
            "score": score,
            "completed_games": count,
        }));
    } else {
        println!("Recorded game: {game_id}");
    }
    Ok(0)
}

fn run_list(json_output: bool) -> Result<i32, DevotrackError> {
    let engine = super::open_engine()?;
    let games = engine.completed_games();

    if json_output {
        super::print_json(json!({ "games": games }));
    } else {
        output::text::print_game_list(&games);
    }
    Ok(0)
}
