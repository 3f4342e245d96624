//! Built-in Seeding Plan
//!
//! The predefined task roster every seeded account receives, and the
//! enrichment table applied to tasks the user already happens to have.

/// How often and how long a task gets worked on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSpec {
    pub name: &'static str,

    /// Per-weekday probability of tracking any time at all.
    pub freq: f64,

    /// Daily time budget bounds, in hours.
    pub min_hours: f64,
    pub max_hours: f64,
}

/// Tasks created on first seeding when absent.
pub const SEED_TASKS: [TaskSpec; 5] = [
    TaskSpec { name: "deep work",     freq: 0.85, min_hours: 1.0, max_hours: 3.5 },
    TaskSpec { name: "email & slack", freq: 0.90, min_hours: 0.3, max_hours: 1.2 },
    TaskSpec { name: "code review",   freq: 0.65, min_hours: 0.5, max_hours: 2.0 },
    TaskSpec { name: "meetings",      freq: 0.55, min_hours: 0.5, max_hours: 2.0 },
    TaskSpec { name: "planning",      freq: 0.40, min_hours: 0.3, max_hours: 1.0 },
];

/// Tasks enriched only when the user already has them, never created.
pub const ENRICH_TASKS: [TaskSpec; 2] = [
    TaskSpec { name: "React Query",    freq: 0.55, min_hours: 0.5, max_hours: 2.5 },
    TaskSpec { name: "Interview Prep", freq: 0.45, min_hours: 0.5, max_hours: 1.5 },
];
