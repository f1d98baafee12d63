//! To-do Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The plain
//! `TodoState` methods carry all list semantics so they work the same
//! against the reactive store and against a `RefCell` in tests.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};

/// Client-only key of a rendered row. Never sent to the server.
pub type RowKey = u32;

/// One rendered list row
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub key: RowKey,
    pub task: Task,
}

/// State behind one to-do page: the text field and the list rows
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Current contents of the task input
    pub input: String,
    /// Rows in display order
    pub rows: Vec<Row>,
    next_key: RowKey,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the list and render `tasks` in the order received
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.rows.clear();
        for task in tasks {
            self.push(task);
        }
    }

    /// Append a row, returning its key
    pub fn push(&mut self, task: Task) -> RowKey {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        self.rows.push(Row { key, task });
        key
    }

    pub fn get(&self, key: RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Flip the completed flag. Returns the new value, None if the row is gone.
    pub fn toggle(&mut self, key: RowKey) -> Option<bool> {
        let row = self.rows.iter_mut().find(|row| row.key == key)?;
        row.task.completed = !row.task.completed;
        Some(row.task.completed)
    }

    /// Set the completed flag. Returns false if the row is gone.
    pub fn set_completed(&mut self, key: RowKey, completed: bool) -> bool {
        match self.rows.iter_mut().find(|row| row.key == key) {
            Some(row) => {
                row.task.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: RowKey) -> Option<Task> {
        let index = self.rows.iter().position(|row| row.key == key)?;
        Some(self.rows.remove(index).task)
    }

    /// Server id and completed flag of a row, if it is synced
    pub fn synced_task(&self, key: RowKey) -> Option<(TaskId, bool)> {
        let row = self.get(key)?;
        row.task.id.clone().map(|id| (id, row.task.completed))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.task.completed).count()
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

pub fn new_todo_store() -> TodoStore {
    Store::new(TodoState::new())
}

/// Read/write access to a `TodoState`.
///
/// Handlers only touch state through this, never across an `.await`.
/// `None` means the page owning the state is gone (its store was disposed).
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
    fn write_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;
}

impl StateHandle for TodoStore {
    fn read_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        let mut guard = self.try_write()?;
        Some(f(&mut guard))
    }
}

impl StateHandle for RefCell<TodoState> {
    fn read_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn synced(id: i64, text: &str, completed: bool) -> Task {
        Task {
            id: Some(TaskId::Number(id)),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_replace_all_keeps_order() {
        let mut state = TodoState::new();
        state.push(Task::local("stale"));

        state.replace_all(vec![synced(3, "c", false), synced(1, "a", true), synced(2, "b", false)]);

        let texts: Vec<_> = state.rows.iter().map(|r| r.task.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
        assert_eq!(state.completed_count(), 1);
    }

    #[test]
    fn test_keys_are_unique_after_removal() {
        let mut state = TodoState::new();
        let a = state.push(Task::local("a"));
        let b = state.push(Task::local("b"));
        state.remove(a);
        let c = state.push(Task::local("c"));

        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_toggle_and_set_completed() {
        let mut state = TodoState::new();
        let key = state.push(Task::local("a"));

        assert_eq!(state.toggle(key), Some(true));
        assert_eq!(state.toggle(key), Some(false));
        assert!(state.set_completed(key, true));
        assert!(state.get(key).unwrap().task.completed);
    }

    #[test]
    fn test_missing_row_is_noop() {
        let mut state = TodoState::new();
        let key = state.push(Task::local("a"));
        state.remove(key);

        assert_eq!(state.toggle(key), None);
        assert!(!state.set_completed(key, true));
        assert!(state.remove(key).is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_synced_task_requires_id() {
        let mut state = TodoState::new();
        let local = state.push(Task::local("a"));
        let remote = state.push(synced(9, "b", true));

        assert!(state.synced_task(local).is_none());
        assert_eq!(state.synced_task(remote), Some((TaskId::Number(9), true)));
    }

    #[test]
    fn test_store_handle_reads_and_writes() {
        let owner = Owner::new();
        let store = owner.with(new_todo_store);

        assert_eq!(store.write_state(|s| s.push(Task::local("a"))), Some(0));
        assert_eq!(store.read_state(|s| s.len()), Some(1));
    }

    #[test]
    fn test_disposed_store_is_page_gone() {
        let owner = Owner::new();
        let store = owner.with(new_todo_store);
        owner.cleanup();

        assert_eq!(store.write_state(|s| s.push(Task::local("late"))), None);
        assert_eq!(store.read_state(|s| s.len()), None);
    }
}
