use chrono::{DateTime, Utc};

use crate::engine::ProgressSummary;
use crate::models::{CompletedGame, StreakData, TaskProgress};

pub fn print_summary(s: &ProgressSummary, week_start: DateTime<Utc>) {
    println!(
        "Week: day {} of 7 (started {})",
        s.week_day,
        week_start.format("%Y-%m-%d %H:%M UTC")
    );
    println!("Tasks: {}/{} completed", s.completed_tasks, s.total_tasks);
    println!("Total: {} XP, {} min", s.total_xp, s.total_time);
    print_streak(&s.streak);
}

pub fn print_streak(s: &StreakData) {
    match s.last_completed_date {
        Some(ref last) => println!(
            "Streak: {} day(s), longest {} (last {})",
            s.current_streak,
            s.longest_streak,
            last.format("%Y-%m-%d")
        ),
        None => println!("Streak: none yet, longest {}", s.longest_streak),
    }
}

pub fn print_task(t: &TaskProgress) {
    println!("Task {}", t.id);
    println!("  Completed: {}", if t.completed { "yes" } else { "no" });
    if let Some(ref at) = t.completed_at {
        println!("  Completed at: {}", at.to_rfc3339());
    }
    println!("  XP: {}", t.xp_earned);
    println!("  Time: {} min", t.time_spent);
}

pub fn print_task_list(tasks: &[TaskProgress]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let mark = if t.completed { "x" } else { " " };
        println!("  [{mark}] Task {} xp={} time={}m", t.id, t.xp_earned, t.time_spent);
    }
}

pub fn print_game_list(games: &[CompletedGame]) {
    if games.is_empty() {
        println!("No completed games.");
        return;
    }
    for g in games {
        let score = g.score.map(|s| format!(" score={s}")).unwrap_or_default();
        println!("  {} {}{}", g.completed_at.format("%Y-%m-%d %H:%M"), g.game_id, score);
    }
}
