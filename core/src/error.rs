use thiserror::Error;

/// The one error kind the task list raises: an index-based operation
/// was given a task number outside the current bounds. The list never
/// recovers this itself; the command layer translates it into the
/// user-facing "not a valid task number" message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("task number {task_number} is out of range for a list of {size} tasks")]
pub struct OutOfRangeError {
    pub task_number: usize,
    pub size: usize,
}
