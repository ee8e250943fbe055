use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::engine::clock::Clock;
use crate::error::DevotrackError;
use crate::models::{CompletedGame, UserProgress};

use super::kv_repo::KeyValueStore;

pub const USER_PROGRESS_KEY: &str = "user_progress";
pub const COMPLETED_GAMES_KEY: &str = "completed_games";
pub const LAST_ACTIVE_KEY: &str = "last_active";
/// Written by older app versions. Only ever removed.
pub const LEGACY_WEEKLY_TASKS_KEY: &str = "weekly_tasks";
pub const LEGACY_STREAK_DATA_KEY: &str = "streak_data";

const ALL_KEYS: [&str; 5] = [
    USER_PROGRESS_KEY,
    LEGACY_WEEKLY_TASKS_KEY,
    LEGACY_STREAK_DATA_KEY,
    LAST_ACTIVE_KEY,
    COMPLETED_GAMES_KEY,
];

/// Persistence gateway for progress state.
///
/// Every operation except [`ProgressStore::clear_all`] is best-effort: a
/// failing backend is logged and replaced by a default value or a no-op, so
/// callers never see an error from progress tracking.
pub struct ProgressStore<S, C> {
    kv: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> ProgressStore<S, C> {
    pub fn new(kv: S, clock: C) -> Self {
        Self { kv, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn save(&self, progress: &UserProgress) {
        if let Err(e) = self.try_save(progress) {
            warn!(error = %e, "failed to save user progress");
        }
    }

    fn try_save(&self, progress: &UserProgress) -> Result<(), DevotrackError> {
        let json = serde_json::to_string(progress)?;
        self.kv.set_item(USER_PROGRESS_KEY, &json)?;
        debug!(total_xp = progress.total_xp, "saved user progress");
        Ok(())
    }

    /// Stored progress, or a fresh default record when nothing usable is stored.
    pub fn load(&self) -> UserProgress {
        match self.try_load() {
            Ok(Some(progress)) => progress,
            Ok(None) => {
                debug!("no stored user progress, using defaults");
                UserProgress::new(self.now())
            }
            Err(e) => {
                warn!(error = %e, "failed to load user progress, using defaults");
                UserProgress::new(self.now())
            }
        }
    }

    fn try_load(&self) -> Result<Option<UserProgress>, DevotrackError> {
        match self.kv.get_item(USER_PROGRESS_KEY)? {
            Some(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
            _ => Ok(None),
        }
    }

    /// Append `game` to the log. A failed read skips the write so existing
    /// entries are never replaced.
    pub fn save_completed_game(&self, game: CompletedGame) {
        let mut games: Vec<CompletedGame> = match self.kv.get_item(COMPLETED_GAMES_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "discarding corrupt completed games log");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read completed games, not recording game");
                return;
            }
        };
        games.push(game);
        let result = serde_json::to_string(&games)
            .map_err(DevotrackError::from)
            .and_then(|json| self.kv.set_item(COMPLETED_GAMES_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "failed to save completed game");
        }
    }

    pub fn load_completed_games(&self) -> Vec<CompletedGame> {
        let result: Result<Vec<CompletedGame>, DevotrackError> =
            self.kv.get_item(COMPLETED_GAMES_KEY).and_then(|raw| match raw {
                Some(json) => Ok(serde_json::from_str(&json)?),
                None => Ok(Vec::new()),
            });
        result.unwrap_or_else(|e| {
            warn!(error = %e, "failed to load completed games");
            Vec::new()
        })
    }

    /// Last recorded activity. Stored as a bare ISO string.
    pub fn last_active_date(&self) -> Option<DateTime<Utc>> {
        match self.kv.get_item(LAST_ACTIVE_KEY) {
            Ok(Some(raw)) => match DateTime::parse_from_rfc3339(raw.trim()) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring unparsable last active date");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!(error = %e, "error getting last active date");
                None
            }
        }
    }

    pub fn set_last_active_date(&self, now: DateTime<Utc>) {
        if let Err(e) = self.kv.set_item(LAST_ACTIVE_KEY, &now.to_rfc3339()) {
            debug!(error = %e, "failed to update last active date");
        }
    }

    /// Remove every progress key. Unlike the other operations, failure is
    /// reported to the caller.
    pub fn clear_all(&self) -> Result<(), DevotrackError> {
        self.kv.remove_items(&ALL_KEYS).map_err(|e| {
            error!(error = %e, "error clearing progress data");
            e
        })
    }
}
