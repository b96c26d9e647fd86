use anyhow::Result;

use crate::model::task::Task;

/// Persistence seam for the task list: one load at startup, one save
/// after every mutating command.
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
