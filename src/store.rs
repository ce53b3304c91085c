use crate::domain::Task;
use crate::error::ActionError;

/// Ordered task list. Insertion order is display order; tasks are
/// addressed positionally. Owned by the application root and handed to the
/// controller and UI by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a new incomplete task. The text is trimmed before storage;
    /// blank input is rejected without changing the store.
    pub fn add(&mut self, text: &str) -> Result<(), ActionError> {
        let task = Task::new(text).ok_or(ActionError::EmptyTask)?;
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the task at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Result<Task, ActionError> {
        if index >= self.tasks.len() {
            return Err(ActionError::NoSelection);
        }
        Ok(self.tasks.remove(index))
    }

    /// Mark the task at `index` complete. Idempotent: completing an
    /// already-completed task leaves the store unchanged.
    pub fn complete(&mut self, index: usize) -> Result<(), ActionError> {
        let task = self.tasks.get_mut(index).ok_or(ActionError::NoSelection)?;
        task.completed = true;
        Ok(())
    }

    /// Remove all tasks
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Lazy, restartable sequence of display strings, one per task.
    /// Pure with respect to store state; no side effects.
    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks.iter().map(Task::display_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_appends_trimmed_incomplete_task() {
        let mut store = TaskStore::default();
        store.add("  Read ch.1  ").unwrap();

        assert_eq!(store.len(), 1);
        let task = store.get(0).unwrap();
        assert_eq!(task.text, "Read ch.1");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_blank_leaves_store_unchanged() {
        let mut store = TaskStore::default();
        store.add("Read ch.1").unwrap();

        assert_eq!(store.add(""), Err(ActionError::EmptyTask));
        assert_eq!(store.add("   "), Err(ActionError::EmptyTask));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = TaskStore::new(vec![Task::new("Read ch.1").unwrap()]);
        store.add("Write notes").unwrap();

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Read ch.1", "Write notes"]);
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn test_remove_at_index() {
        let mut store = TaskStore::default();
        store.add("one").unwrap();
        store.add("two").unwrap();
        store.add("three").unwrap();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.text, "two");

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three"]);
    }

    #[test]
    fn test_remove_out_of_range_is_selection_error() {
        let mut store = TaskStore::default();
        assert_eq!(store.remove(0), Err(ActionError::NoSelection));

        store.add("one").unwrap();
        assert_eq!(store.remove(1), Err(ActionError::NoSelection));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut store = TaskStore::default();
        store.add("one").unwrap();

        store.complete(0).unwrap();
        let once = store.clone();

        store.complete(0).unwrap();
        assert_eq!(store, once);
        assert!(store.get(0).unwrap().completed);
    }

    #[test]
    fn test_complete_out_of_range_is_selection_error() {
        let mut store = TaskStore::default();
        assert_eq!(store.complete(0), Err(ActionError::NoSelection));
    }

    #[test]
    fn test_clear() {
        let mut store = TaskStore::default();
        store.add("one").unwrap();
        store.add("two").unwrap();

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_display_lines() {
        let mut store = TaskStore::default();
        store.add("Read ch.1").unwrap();
        store.add("Write notes").unwrap();
        store.complete(0).unwrap();

        let lines: Vec<String> = store.display_lines().collect();
        assert_eq!(lines, vec!["Read ch.1 [✔]", "Write notes [✘]"]);

        // Restartable: a second pass yields the same sequence
        let again: Vec<String> = store.display_lines().collect();
        assert_eq!(again, lines);
    }
}
