use crate::error::OutOfRangeError;
use crate::messages;
use crate::model::task::Task;

/// Ordered task collection. Insertion order is the display order and
/// the indexing basis: the numbers shown to the user are 1-based,
/// positions in the vector 0-based. `mark_done` and `delete_task` take
/// user-facing 1-based numbers; `get_task` is a raw 0-based lookup.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds the list from storage-loaded tasks at startup.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The backing slice, in display order. Handed to the store for
    /// persistence after each mutating command.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends to the end of the list. Always succeeds.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Marks the task with the given 1-based number done and returns a
    /// reference to the very task the list holds. Re-marking a done
    /// task is a no-op on its rendered state.
    pub fn mark_done(&mut self, task_number: usize) -> Result<&Task, OutOfRangeError> {
        let pos = self.position(task_number)?;
        self.tasks[pos].mark_done();
        Ok(&self.tasks[pos])
    }

    /// Removes the task with the given 1-based number and returns it.
    pub fn delete_task(&mut self, task_number: usize) -> Result<Task, OutOfRangeError> {
        let pos = self.position(task_number)?;
        Ok(self.tasks.remove(pos))
    }

    /// Direct 0-based lookup, unlike the user-numbered operations.
    pub fn get_task(&self, index: usize) -> Result<&Task, OutOfRangeError> {
        self.tasks.get(index).ok_or(OutOfRangeError {
            task_number: index,
            size: self.tasks.len(),
        })
    }

    /// Renders the whole list, one numbered line per task, or the
    /// fixed empty-list message.
    pub fn list_tasks(&self) -> String {
        if self.tasks.is_empty() {
            return messages::EMPTY_LIST.to_string();
        }

        let mut out = String::from(messages::LIST_HEADER);
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, task));
        }
        out
    }

    /// Renders every task whose body (description plus temporal
    /// suffix, glyph prefix excluded) contains the keyword,
    /// case-insensitively. This is a literal substring match; matches
    /// keep their original list numbers.
    pub fn find_task(&self, keyword: &str) -> String {
        let needle = keyword.to_lowercase();
        let mut out = String::from(messages::FIND_HEADER);
        let mut has_match = false;

        for (i, task) in self.tasks.iter().enumerate() {
            if task.body().to_lowercase().contains(&needle) {
                has_match = true;
                out.push_str(&format!("\n{}. {}", i + 1, task));
            }
        }

        if !has_match {
            return messages::NO_MATCH.to_string();
        }
        out
    }

    fn position(&self, task_number: usize) -> Result<usize, OutOfRangeError> {
        if task_number < 1 || task_number > self.tasks.len() {
            return Err(OutOfRangeError {
                task_number,
                size: self.tasks.len(),
            });
        }
        Ok(task_number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add_task(Task::todo("read a book".to_string()));
        list.add_task(Task::deadline(
            "return book".to_string(),
            "June 6th".to_string(),
        ));
        list.add_task(Task::event(
            "project meeting".to_string(),
            "Mon 2pm".to_string(),
            "Mon 4pm".to_string(),
        ));
        list
    }

    #[test]
    fn test_add_task_appends() {
        let mut list = TaskList::new();
        assert_eq!(list.size(), 0);

        list.add_task(Task::todo("read a book".to_string()));
        assert_eq!(list.size(), 1);

        list.add_task(Task::todo("water plants".to_string()));
        assert_eq!(list.size(), 2);
        assert_eq!(
            list.get_task(1).unwrap().description(),
            "water plants",
            "newest task should sit at the end"
        );
    }

    #[test]
    fn test_list_tasks_renders_in_order() {
        let list = sample_list();
        assert_eq!(
            list.list_tasks(),
            "Here are the tasks in your list:\n\
             1. [T][ ] read a book\n\
             2. [D][ ] return book (by: June 6th)\n\
             3. [E][ ] project meeting (from: Mon 2pm to: Mon 4pm)"
        );
    }

    #[test]
    fn test_list_tasks_empty() {
        let list = TaskList::new();
        assert_eq!(list.list_tasks(), "You don't have any tasks in your list!");
    }

    #[test]
    fn test_mark_done_returns_the_held_task() {
        let mut list = sample_list();
        let task = list.mark_done(2).unwrap();
        assert_eq!(task.to_string(), "[D][X] return book (by: June 6th)");

        // The mutation is visible through the list itself.
        assert!(list.get_task(1).unwrap().is_done());
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut list = sample_list();
        list.mark_done(1).unwrap();
        let first = list.list_tasks();
        list.mark_done(1).unwrap();
        assert_eq!(list.list_tasks(), first);
    }

    #[test]
    fn test_mark_done_out_of_range() {
        let mut list = sample_list();
        let before = list.clone();

        assert!(list.mark_done(0).is_err());
        assert!(list.mark_done(4).is_err());
        assert_eq!(list, before, "failed lookups must not mutate the list");
    }

    #[test]
    fn test_delete_task_removes_the_returned_task() {
        let mut list = sample_list();
        let removed = list.delete_task(2).unwrap();
        assert_eq!(removed.description(), "return book");
        assert_eq!(list.size(), 2);
        assert_eq!(list.get_task(0).unwrap().description(), "read a book");
        assert_eq!(list.get_task(1).unwrap().description(), "project meeting");
    }

    #[test]
    fn test_delete_last_task() {
        let mut list = sample_list();
        let removed = list.delete_task(3).unwrap();
        assert_eq!(removed.description(), "project meeting");
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_delete_task_out_of_range() {
        let mut list = sample_list();
        assert_eq!(
            list.delete_task(4),
            Err(OutOfRangeError {
                task_number: 4,
                size: 3
            })
        );
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_get_task_is_zero_based() {
        let list = sample_list();
        assert_eq!(list.get_task(0).unwrap().description(), "read a book");
        assert!(list.get_task(3).is_err());
    }

    #[test]
    fn test_find_task_keeps_original_numbers() {
        let list = sample_list();
        assert_eq!(
            list.find_task("book"),
            "Here are the matching tasks in your list:\n\
             1. [T][ ] read a book\n\
             2. [D][ ] return book (by: June 6th)"
        );
        assert_eq!(
            list.find_task("meeting"),
            "Here are the matching tasks in your list:\n\
             3. [E][ ] project meeting (from: Mon 2pm to: Mon 4pm)"
        );
    }

    #[test]
    fn test_find_task_is_case_insensitive() {
        let list = sample_list();
        assert_eq!(list.find_task("BOOK"), list.find_task("book"));
    }

    #[test]
    fn test_find_task_matches_temporal_suffix() {
        let list = sample_list();
        assert_eq!(
            list.find_task("June"),
            "Here are the matching tasks in your list:\n\
             2. [D][ ] return book (by: June 6th)"
        );
    }

    #[test]
    fn test_find_task_no_match() {
        let list = sample_list();
        assert_eq!(
            list.find_task("laundry"),
            "Sorry! I couldn't find any tasks with that keyword."
        );
    }

    #[test]
    fn test_find_task_treats_metacharacters_literally() {
        let mut list = TaskList::new();
        list.add_task(Task::todo("learn C++ (chapter 1)".to_string()));

        assert_eq!(
            list.find_task("c++ (ch"),
            "Here are the matching tasks in your list:\n1. [T][ ] learn C++ (chapter 1)"
        );
        assert_eq!(
            list.find_task(".*"),
            "Sorry! I couldn't find any tasks with that keyword."
        );
    }

    #[test]
    fn test_find_task_ignores_glyph_prefix() {
        let list = sample_list();
        // Every rendered line starts with "[T]"/"[D]"/"[E]", but the
        // glyphs are not searchable text.
        assert_eq!(
            list.find_task("[T]"),
            "Sorry! I couldn't find any tasks with that keyword."
        );
    }
}
