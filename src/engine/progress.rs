use serde::Serialize;
use tracing::{debug, info, warn};

use crate::db::kv_repo::KeyValueStore;
use crate::db::progress_store::ProgressStore;
use crate::engine::clock::Clock;
use crate::engine::{streak, week};
use crate::error::DevotrackError;
use crate::models::{CompletedGame, StreakData, TaskProgress, UserProgress, WEEKLY_TASK_COUNT};

pub const DEFAULT_TASK_XP: u32 = 10;
pub const DEFAULT_TASK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The task was marked complete and totals were credited.
    Completed { already_completed: bool },
    /// No task has this id; nothing changed.
    UnknownTask,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub week_day: u8,
    pub total_xp: u64,
    pub total_time: u64,
    pub streak: StreakData,
}

/// Owns the progress record for one session.
///
/// Mutations apply in memory first and are then written through the store.
/// A failed write leaves memory and storage out of step until the next
/// successful write.
pub struct ProgressEngine<S, C> {
    store: ProgressStore<S, C>,
    progress: UserProgress,
}

impl<S: KeyValueStore, C: Clock> ProgressEngine<S, C> {
    /// Build the engine and run the load sequence.
    pub fn load(store: ProgressStore<S, C>) -> Self {
        let progress = load_sequence(&store);
        Self { store, progress }
    }

    pub fn store(&self) -> &ProgressStore<S, C> {
        &self.store
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Re-read storage, replacing the in-memory record.
    pub fn refresh_progress(&mut self) {
        self.progress = load_sequence(&self.store);
    }

    pub fn complete_task(&mut self, task_id: u8, xp: u32, time_spent: u32) -> CompletionOutcome {
        let now = self.store.now();
        let Some(task) = self.progress.weekly_tasks.iter_mut().find(|t| t.id == task_id) else {
            warn!(task_id, "ignoring completion of unknown task");
            return CompletionOutcome::UnknownTask;
        };

        let already_completed = task.completed;
        task.completed = true;
        task.completed_at = Some(now);
        task.xp_earned = xp;
        task.time_spent = time_spent;

        let previous = self.progress.streak.last_completed_date;
        self.progress.streak = streak::calculate_streak(&self.store, previous);
        self.progress.total_xp = self.progress.total_xp.saturating_add(u64::from(xp));
        self.progress.total_time = self.progress.total_time.saturating_add(u64::from(time_spent));

        info!(
            task_id,
            xp,
            time_spent,
            already_completed,
            streak = self.progress.streak.current_streak,
            "task completed"
        );
        self.store.save(&self.progress);
        self.store.set_last_active_date(now);

        CompletionOutcome::Completed { already_completed }
    }

    /// Clear this week's task flags. Streak and totals are kept.
    pub fn reset_weekly_progress(&mut self) {
        self.progress = self.progress.with_new_week(self.store.now());
        info!("weekly progress reset");
        self.store.save(&self.progress);
    }

    pub fn task_progress(&self, task_id: u8) -> Option<&TaskProgress> {
        self.progress.task(task_id)
    }

    pub fn current_week_day(&self) -> u8 {
        week::current_week_day(self.progress.current_week_start, self.store.now())
    }

    pub fn mark_game_completed(&self, game_id: &str, score: Option<f64>) {
        let game = CompletedGame {
            game_id: game_id.to_string(),
            completed_at: self.store.now(),
            score,
        };
        debug!(game_id, ?score, "recording completed game");
        self.store.save_completed_game(game);
    }

    pub fn completed_games(&self) -> Vec<CompletedGame> {
        self.store.load_completed_games()
    }

    /// Remove all stored progress. On success the in-memory record starts over.
    pub fn clear_all(&mut self) -> Result<(), DevotrackError> {
        self.store.clear_all()?;
        self.progress = UserProgress::new(self.store.now());
        info!("progress data cleared");
        Ok(())
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed_tasks: self.progress.completed_count(),
            total_tasks: self.progress.weekly_tasks.len(),
            week_day: self.current_week_day(),
            total_xp: self.progress.total_xp,
            total_time: self.progress.total_time,
            streak: self.progress.streak.clone(),
        }
    }
}

fn load_sequence<S: KeyValueStore, C: Clock>(store: &ProgressStore<S, C>) -> UserProgress {
    match try_load_sequence(store) {
        Ok(progress) => progress,
        Err(e) => {
            warn!(error = %e, "progress load failed, using defaults");
            UserProgress::new(store.now())
        }
    }
}

fn try_load_sequence<S: KeyValueStore, C: Clock>(
    store: &ProgressStore<S, C>,
) -> Result<UserProgress, DevotrackError> {
    let loaded = store.load();
    validate_weekly_tasks(&loaded.weekly_tasks)?;

    let now = store.now();
    if week::should_reset_weekly_progress(loaded.current_week_start, now) {
        info!(week_start = %loaded.current_week_start, "starting a new week");
        let reset = loaded.with_new_week(now);
        store.save(&reset);
        return Ok(reset);
    }
    Ok(loaded)
}

/// Weekly task ids must be exactly 1..=7, each once.
fn validate_weekly_tasks(tasks: &[TaskProgress]) -> Result<(), DevotrackError> {
    let mut ids: Vec<u8> = tasks.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    let expected: Vec<u8> = (1..=WEEKLY_TASK_COUNT).collect();
    if ids != expected {
        return Err(DevotrackError::validation(format!(
            "stored weekly tasks have ids {ids:?}, expected 1-{WEEKLY_TASK_COUNT}"
        )));
    }
    Ok(())
}
