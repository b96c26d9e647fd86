use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three shapes a task can take. Deadline and event times are kept
/// as the user's own words ("June 6th"), not parsed dates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    fn new(description: String, kind: TaskKind) -> Self {
        Self {
            description,
            done: false,
            kind,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn todo(description: String) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: String, by: String) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: String, from: String, to: String) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the task done. The flag only ever moves false -> true;
    /// re-marking keeps the original completion time.
    pub fn mark_done(&mut self) {
        self.done = true;
        if self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
    }

    /// The rendered text without the leading glyphs: description plus
    /// the kind-specific temporal suffix. Keyword search runs against
    /// this, never against the glyph prefix.
    pub fn body(&self) -> String {
        match &self.kind {
            TaskKind::Todo => self.description.clone(),
            TaskKind::Deadline { by } => format!("{} (by: {})", self.description, by),
            TaskKind::Event { from, to } => {
                format!("{} (from: {} to: {})", self.description, from, to)
            }
        }
    }

    fn kind_glyph(&self) -> &'static str {
        match self.kind {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline { .. } => "[D]",
            TaskKind::Event { .. } => "[E]",
        }
    }

    fn status_glyph(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.kind_glyph(), self.status_glyph(), self.body())
    }
}
