use serde_json::{json, Value};

use crate::engine::ProgressSummary;
use crate::error::DevotrackError;
use crate::models::StreakData;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &DevotrackError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn streak_json(s: &StreakData) -> Value {
    json!({
        "current": s.current_streak,
        "longest": s.longest_streak,
        "last_completed_date": s.last_completed_date
    })
}

pub fn summary_json(s: &ProgressSummary) -> Value {
    let percentage = if s.total_tasks > 0 {
        (s.completed_tasks as f64 / s.total_tasks as f64) * 100.0
    } else {
        0.0
    };
    json!({
        "completed_tasks": s.completed_tasks,
        "total_tasks": s.total_tasks,
        "percentage": (percentage * 10.0).round() / 10.0,
        "week_day": s.week_day,
        "total_xp": s.total_xp,
        "total_time": s.total_time,
        "streak": streak_json(&s.streak)
    })
}
