//! Seeding Driver
//!
//! Merges generated sessions into a task document and renders the per-task
//! summary printed after a run. The merge is pure: all randomness comes from
//! the caller's RNG and all I/O stays in the binary.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, TimeZone};
use rand::Rng;
use tracing::debug;

use crate::model::{Task, UserData};
use crate::plan::{ENRICH_TASKS, SEED_TASKS, TaskSpec};
use crate::sessions::generate_sessions;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Merge generated sessions for `days` into `data`.
///
/// Creates the predefined tasks when missing, enriches matching pre-existing
/// tasks, never removes anything, and leaves every task's sessions sorted by
/// start. Appending skips any session whose start timestamp the task already
/// has, so re-running is additive.
pub fn seed_user_data<R: Rng>(rng: &mut R, data: &mut UserData, days: &[NaiveDate]) {
    for spec in &SEED_TASKS {
        data.ensure_task(spec.name);
    }

    for spec in &SEED_TASKS {
        if let Some(task) = data.task_by_name_mut(spec.name) {
            add_sessions(rng, task, spec, days);
        }
    }
    for spec in &ENRICH_TASKS {
        if let Some(task) = data.task_by_name_mut(spec.name) {
            add_sessions(rng, task, spec, days);
        }
    }

    for task in &mut data.tasks {
        task.sort_sessions();
    }
}

fn add_sessions<R: Rng>(rng: &mut R, task: &mut Task, spec: &TaskSpec, days: &[NaiveDate]) {
    let mut existing = task.session_starts();
    let mut added = 0usize;

    for &day in days {
        if rng.r#gen::<f64>() > spec.freq {
            continue;
        }
        let hours = rng.gen_range(spec.min_hours..spec.max_hours);
        for session in generate_sessions(rng, day, hours) {
            if existing.insert(session.start) {
                task.sessions.push(session);
                added += 1;
            }
        }
    }

    debug!(task = %task.name, added, "sessions merged");
}

/// One row of the post-run report.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSummary {
    pub name: String,

    /// Distinct local calendar days with at least one finished session.
    pub days_touched: usize,

    pub total_hours: f64,
}

/// Per-task totals over the whole document, in task order.
///
/// In-progress sessions carry no duration yet and are left out.
pub fn summarize(data: &UserData) -> Vec<TaskSummary> {
    data.tasks
        .iter()
        .map(|task| {
            let total_ms: i64 = task.sessions.iter().filter_map(|s| s.duration_ms()).sum();
            let days: HashSet<NaiveDate> = task
                .sessions
                .iter()
                .filter(|s| s.is_finished())
                .filter_map(|s| Local.timestamp_millis_opt(s.start).single())
                .map(|dt| dt.date_naive())
                .collect();
            TaskSummary {
                name: task.name.clone(),
                days_touched: days.len(),
                total_hours: total_ms as f64 / MS_PER_HOUR,
            }
        })
        .collect()
}

/// Render the report printed to stdout after a successful run.
pub fn render_report(email: &str, days: &[NaiveDate], summaries: &[TaskSummary]) -> String {
    let mut out = String::new();
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => {
            out.push_str(&format!(
                "Seeded {} weekdays ({first} -> {last}) for {email}\n\n",
                days.len()
            ));
        }
        _ => out.push_str(&format!("No weekdays to seed for {email}\n\n")),
    }
    for summary in summaries {
        out.push_str(&format!(
            "  {:<20}  {:>2} days  {:>5.1}h\n",
            summary.name, summary.days_touched, summary.total_hours
        ));
    }
    out
}
