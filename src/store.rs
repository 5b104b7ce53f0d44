//! Task List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Fetched task list with its load status
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Read-only projection from `GET /tasks/`
    pub tasks: Vec<Task>,
    /// A fetch is in flight
    pub loading: bool,
    /// Message for the last failed fetch
    pub error: Option<String>,
}

impl TaskListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &TaskStore) {
    store.loading().set(true);
}

/// Replace the list after a successful fetch
pub fn store_set_tasks(store: &TaskStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
    store.error().set(None);
    store.loading().set(false);
}

/// A failed fetch leaves no projection behind
pub fn store_set_error(store: &TaskStore, message: impl Into<String>) {
    store.tasks().set(Vec::new());
    store.error().set(Some(message.into()));
    store.loading().set(false);
}

/// Add a newly created task, replacing any entry with the same id
pub fn store_add_task(store: &TaskStore, task: Task) {
    store.tasks().update(|tasks| match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    });
}

/// Drop everything fetched for the signed-in user
pub fn store_reset(store: &TaskStore) {
    store.set(TaskListState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            notes: None,
            due_date: None,
            high_priority: None,
            completed: false,
            created_at: None,
            custom_fields: Vec::new(),
        }
    }

    #[test]
    fn test_store_lifecycle() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(TaskListState::new());
            assert!(store.loading().get_untracked());

            store_set_error(&store, "Failed to load tasks");
            assert!(!store.loading().get_untracked());
            assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to load tasks"));

            store_begin_load(&store);
            store_set_tasks(&store, vec![task(1, "a")]);
            assert!(store.error().get_untracked().is_none());

            store_add_task(&store, task(2, "b"));
            store_add_task(&store, task(1, "a2"));
            let tasks = store.tasks().get_untracked();
            assert_eq!(tasks.len(), 2);
            assert_eq!(tasks[0].title, "a2");
        });
    }

    #[test]
    fn test_failed_fetch_clears_previous_tasks() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(TaskListState::new());
            store_set_tasks(&store, vec![task(1, "first user's task")]);

            store_begin_load(&store);
            store_set_error(&store, "Failed to load tasks");

            assert!(store.tasks().get_untracked().is_empty());
            assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to load tasks"));
        });
    }

    #[test]
    fn test_reset_on_sign_out() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(TaskListState::new());
            store_set_tasks(&store, vec![task(1, "a"), task(2, "b")]);
            store_set_error(&store, "Failed to load tasks");
            store_set_tasks(&store, vec![task(3, "c")]);

            store_reset(&store);
            assert!(store.tasks().get_untracked().is_empty());
            assert!(store.error().get_untracked().is_none());
            assert!(store.loading().get_untracked());
        });
    }
}
