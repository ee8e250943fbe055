use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of recurring tasks in one week. Task ids run from 1 to this value.
pub const WEEKLY_TASK_COUNT: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    pub id: u8,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub xp_earned: u32,
    /// Minutes.
    pub time_spent: u32,
}

impl TaskProgress {
    pub fn incomplete(id: u8) -> Self {
        Self {
            id,
            completed: false,
            completed_at: None,
            xp_earned: 0,
            time_spent: 0,
        }
    }
}

/// The seven weekly tasks in their initial, all-incomplete state.
pub fn default_weekly_tasks() -> Vec<TaskProgress> {
    (1..=WEEKLY_TASK_COUNT).map(TaskProgress::incomplete).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub current_streak: u32,
    /// Stored as an empty string while no streak is established.
    #[serde(with = "empty_as_none")]
    pub last_completed_date: Option<DateTime<Utc>>,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub weekly_tasks: Vec<TaskProgress>,
    pub streak: StreakData,
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    pub total_time: u64,
    pub current_week_start: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            weekly_tasks: default_weekly_tasks(),
            streak: StreakData::default(),
            total_xp: 0,
            total_time: 0,
            current_week_start: now,
        }
    }

    pub fn task(&self, task_id: u8) -> Option<&TaskProgress> {
        self.weekly_tasks.iter().find(|t| t.id == task_id)
    }

    pub fn completed_count(&self) -> usize {
        self.weekly_tasks.iter().filter(|t| t.completed).count()
    }

    /// Copy with a fresh set of weekly tasks starting at `now`. Streak and
    /// totals carry over.
    pub fn with_new_week(&self, now: DateTime<Utc>) -> Self {
        Self {
            weekly_tasks: default_weekly_tasks(),
            current_week_start: now,
            ..self.clone()
        }
    }
}

mod empty_as_none {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_record_shape() {
        let now = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
        let p = UserProgress::new(now);
        let ids: Vec<u8> = p.weekly_tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(p.weekly_tasks.iter().all(|t| !t.completed));
        assert_eq!(p.total_xp, 0);
        assert_eq!(p.total_time, 0);
        assert_eq!(p.streak, StreakData::default());
        assert_eq!(p.current_week_start, now);
    }

    #[test]
    fn test_json_field_names() {
        let now = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
        let v = serde_json::to_value(UserProgress::new(now)).unwrap();
        assert_eq!(v["totalXP"], 0);
        assert_eq!(v["totalTime"], 0);
        assert_eq!(v["streak"]["lastCompletedDate"], "");
        assert_eq!(v["streak"]["currentStreak"], 0);
        assert_eq!(v["weeklyTasks"][0]["xpEarned"], 0);
        assert!(v["weeklyTasks"][0].get("completedAt").is_none());
        assert!(v["currentWeekStart"].as_str().unwrap().starts_with("2025-03-02T09:00:00"));
    }

    #[test]
    fn test_reads_record_written_by_mobile_app() {
        let raw = r#"{
            "weeklyTasks": [
                {"id":1,"completed":true,"completedAt":"2025-03-03T07:15:00.000Z","xpEarned":10,"timeSpent":5},
                {"id":2,"completed":false,"xpEarned":0,"timeSpent":0}
            ],
            "streak": {"currentStreak":2,"lastCompletedDate":"2025-03-03T00:00:00.000Z","longestStreak":4},
            "totalXP": 10,
            "totalTime": 5,
            "currentWeekStart": "2025-03-02T09:00:00.000Z"
        }"#;
        let p: UserProgress = serde_json::from_str(raw).unwrap();
        assert_eq!(p.total_xp, 10);
        assert!(p.weekly_tasks[0].completed_at.is_some());
        assert_eq!(p.streak.longest_streak, 4);
        assert_eq!(
            p.streak.last_completed_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_new_week_keeps_totals() {
        let now = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
        let mut p = UserProgress::new(now);
        p.weekly_tasks[2].completed = true;
        p.total_xp = 40;
        p.streak.current_streak = 3;
        let later = now + chrono::Duration::days(8);
        let next = p.with_new_week(later);
        assert_eq!(next.completed_count(), 0);
        assert_eq!(next.total_xp, 40);
        assert_eq!(next.streak.current_streak, 3);
        assert_eq!(next.current_week_start, later);
    }
}
