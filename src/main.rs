use clap::Parser;
use std::process;

use devotrack::cli::commands::{Cli, Commands};
use devotrack::config::Config;
use devotrack::{cli, db, logging};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let config = db::config_path()
        .map(|path| Config::load(&path))
        .unwrap_or_default();
    logging::init(&config.log_filter);

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output),
        Commands::Status => cli::status::run(json_output),
        Commands::Task(cmd) => cli::task::run(cmd, json_output),
        Commands::Week(cmd) => cli::week::run(cmd, json_output),
        Commands::Game(cmd) => cli::game::run(cmd, json_output),
        Commands::Clear { yes } => cli::clear::run(yes, json_output),
        Commands::Config(cmd) => cli::config::run(cmd, json_output),
    };

    process::exit(exit_code);
}
