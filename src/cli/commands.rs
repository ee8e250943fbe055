use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "devotrack",
    version = VERSION,
    about = "Weekly devotional progress, streaks and XP",
    after_help = "\
NOTE:
  Data lives in $DEVOTRACK_HOME (default: <platform data dir>/devotrack).
  Run `devotrack init` before any other command.

EXIT CODES:
  0  Success
  1  Error (not initialized, unknown task, storage failure, etc.)

BEHAVIOR NOTES:
  Weekly tasks are numbered 1-7. A week starts on the first load and resets
  after 7 full days; XP, minutes and the streak survive the reset.
  Saving progress is best-effort: a failed write is logged, never fatal.
  `clear` is the exception and reports storage failures.
  Set DEVOTRACK_LOG (e.g. `devotrack=debug`) to see logs on stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory
    Init,

    /// Show this week's progress, streak and totals
    Status,

    /// Weekly task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Week management
    #[command(subcommand)]
    Week(WeekCommands),

    /// Completed game log
    #[command(subcommand)]
    Game(GameCommands),

    /// Remove all stored progress
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List this week's tasks
    List,
    /// Show one task
    Show {
        /// Task number (1-7)
        id: u8,
    },
    /// Complete a task, crediting XP and minutes
    #[command(after_help = "\
NOTE:
  Completing an already completed task overwrites its XP/minutes and credits
  the totals again.")]
    Complete {
        /// Task number (1-7)
        id: u8,
        /// XP to credit (default from config, 10)
        #[arg(long)]
        xp: Option<u32>,
        /// Minutes spent (default from config, 5)
        #[arg(long)]
        time: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Start a new week now (keeps XP, minutes and streak)
    Reset,
    /// Show the current day of the week (1-7)
    Day,
}

#[derive(Subcommand)]
pub enum GameCommands {
    /// Record a finished game
    Done {
        /// Game identifier
        game_id: String,
        #[arg(long)]
        score: Option<f64>,
    },
    /// List finished games
    List,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
}
