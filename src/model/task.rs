use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Opaque task identifier, unique within a session and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        TaskId(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: TaskId, title: String, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            title,
            completed: false,
            created_at,
        }
    }
}

/// Which half of the list is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    #[default]
    Pending,
    Completed,
}

impl TaskView {
    pub fn label(self) -> &'static str {
        match self {
            TaskView::Pending => "Pending",
            TaskView::Completed => "Completed",
        }
    }

    pub fn other(self) -> TaskView {
        match self {
            TaskView::Pending => TaskView::Completed,
            TaskView::Completed => TaskView::Pending,
        }
    }

    /// Whether a task belongs to this view
    pub fn shows(self, task: &Task) -> bool {
        match self {
            TaskView::Pending => !task.completed,
            TaskView::Completed => task.completed,
        }
    }
}
