//! Task Document Model
//!
//! Mirrors the JSON schema the tracking app stores in `user_data.tasks_json`.
//! The seeder is a read-modify-write transformer over this document, so every
//! type carries a flattened map of unrecognized fields: anything the app wrote
//! that we do not model survives the round trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use uuid::Uuid;

/// One contiguous block of tracked work time, in epoch milliseconds.
///
/// A session the app is still running has no `end` yet. Every session this
/// crate generates is finished and satisfies `start < end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub start: i64,
    pub end: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// A finished session.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
            extra: Map::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Tracked duration, `None` while the session is still running.
    pub fn duration_ms(&self) -> Option<i64> {
        self.end.map(|end| end - self.start)
    }
}

/// A named task with its session history.
///
/// `name` is the uniqueness key within a user's task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub sessions: Vec<Session>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create an empty task with a fresh UUID v4 id.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sessions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Session starts already present, used to keep seeding additive.
    pub fn session_starts(&self) -> HashSet<i64> {
        self.sessions.iter().map(|s| s.start).collect()
    }

    pub fn sort_sessions(&mut self) {
        self.sessions.sort_by_key(|s| s.start);
    }
}

/// The per-user task document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserData {
    pub fn task_by_name_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.name == name)
    }

    /// Find a task by name, creating it when absent.
    pub fn ensure_task(&mut self, name: &str) -> &mut Task {
        let idx = match self.tasks.iter().position(|t| t.name == name) {
            Some(idx) => idx,
            None => {
                self.tasks.push(Task::new(name));
                self.tasks.len() - 1
            }
        };
        &mut self.tasks[idx]
    }
}
