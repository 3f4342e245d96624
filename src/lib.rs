// ============================================================================
// Taskseed Library
// ============================================================================

pub mod calendar;
pub mod db;
pub mod error;
pub mod model;
pub mod plan;
pub mod seeder;
pub mod sessions;

// Re-export main types for convenience
pub use db::Database;
pub use error::{SeedError, SeedResult};
pub use model::{Session, Task, UserData};
pub use plan::{ENRICH_TASKS, SEED_TASKS, TaskSpec};
pub use seeder::{TaskSummary, render_report, seed_user_data, summarize};
