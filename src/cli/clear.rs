use serde_json::json;

use crate::error::DevotrackError;

pub fn run(yes: bool, json_output: bool) -> i32 {
    match run_inner(yes) {
        Ok(()) => {
            if json_output {
                super::print_json(json!({ "cleared": true }));
            } else {
                println!("All progress data cleared.");
            }
            0
        }
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(yes: bool) -> Result<(), DevotrackError> {
    if !yes {
        return Err(DevotrackError::validation(
            "Refusing to clear progress without --yes",
        ));
    }
    let mut engine = super::open_engine()?;
    engine.clear_all()
}
