use anyhow::Result;
use tracing::debug;

use crate::messages;
use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::repository::TaskStore;

/// One unit of user-requested work. The command set is closed, so a
/// single enum with one dispatch method covers it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Task),
    MarkDone(usize),
    Delete(usize),
    List,
    Find(String),
    Exit,
}

impl Command {
    /// True for the command that should end the session after its
    /// message is shown.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Runs the command against the list and returns the message to
    /// show the user. Mutating commands persist through the store
    /// after the in-memory change; an out-of-range task number becomes
    /// the fixed invalid-number message and leaves the list untouched.
    /// Only storage failures surface as errors.
    pub fn execute(self, tasks: &mut TaskList, store: &impl TaskStore) -> Result<String> {
        debug!(command = ?self, "executing");
        match self {
            Command::Add(task) => {
                let message = messages::added(&task, tasks.size() + 1);
                tasks.add_task(task);
                store.save(tasks.tasks())?;
                Ok(message)
            }
            Command::MarkDone(task_number) => match tasks.mark_done(task_number) {
                Ok(task) => {
                    let message = messages::done(task);
                    store.save(tasks.tasks())?;
                    Ok(message)
                }
                Err(_) => Ok(messages::INVALID_TASK_NUMBER.to_string()),
            },
            Command::Delete(task_number) => match tasks.delete_task(task_number) {
                Ok(task) => {
                    let message = messages::deleted(&task, tasks.size());
                    store.save(tasks.tasks())?;
                    Ok(message)
                }
                Err(_) => Ok(messages::INVALID_TASK_NUMBER.to_string()),
            },
            Command::List => Ok(tasks.list_tasks()),
            Command::Find(keyword) => Ok(tasks.find_task(&keyword)),
            Command::Exit => Ok(messages::GOODBYE.to_string()),
        }
    }
}
