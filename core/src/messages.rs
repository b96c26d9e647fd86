//! User-facing message templates. These are free functions because the
//! wording is fixed and there is no state to carry; every caller gets
//! byte-identical output for the same inputs.

use crate::model::task::Task;

pub const INVALID_TASK_NUMBER: &str = "This is not a valid task number.";
pub const EMPTY_LIST: &str = "You don't have any tasks in your list!";
pub const LIST_HEADER: &str = "Here are the tasks in your list:";
pub const FIND_HEADER: &str = "Here are the matching tasks in your list:";
pub const NO_MATCH: &str = "Sorry! I couldn't find any tasks with that keyword.";
pub const GOODBYE: &str = "Bye. Hope to see you again soon!";

pub fn added(task: &Task, count: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\n{}",
        task,
        task_count(count)
    )
}

pub fn done(task: &Task) -> String {
    format!("Nice! I've marked this done:\n  {}", task)
}

pub fn deleted(task: &Task, count: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\n{}",
        task,
        task_count(count)
    )
}

pub fn task_count(count: usize) -> String {
    format!("Now you have {} tasks in the list.", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_message() {
        let task = Task::todo("read a book".to_string());
        assert_eq!(
            added(&task, 1),
            "Got it. I've added this task:\n  [T][ ] read a book\nNow you have 1 tasks in the list."
        );
    }

    #[test]
    fn test_done_message() {
        let mut task = Task::deadline("return book".to_string(), "June 6th".to_string());
        task.mark_done();
        assert_eq!(
            done(&task),
            "Nice! I've marked this done:\n  [D][X] return book (by: June 6th)"
        );
    }

    #[test]
    fn test_deleted_message() {
        let task = Task::todo("read a book".to_string());
        assert_eq!(
            deleted(&task, 0),
            "Noted. I've removed this task:\n  [T][ ] read a book\nNow you have 0 tasks in the list."
        );
    }

    #[test]
    fn test_task_count_message() {
        assert_eq!(task_count(3), "Now you have 3 tasks in the list.");
    }
}
