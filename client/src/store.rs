//! Client-side cache of server todo state.
//!
//! # Design
//! `TodoStore` mirrors what the server last confirmed: the todo list, a
//! loading flag for full refreshes, and at most one error message. Mutators
//! are update-after-response — the host calls them only once the server has
//! acknowledged the corresponding operation, so the cache never runs ahead
//! of the service. The store itself performs no I/O.

use crate::types::{Todo, UpdateTodo};

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    /// Replace the whole cache, e.g. after a full refresh.
    pub fn set_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Append a server-confirmed todo to the end of the cache.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Apply a server-confirmed partial update to the cached copy.
    /// Returns whether a todo with `id` was present.
    pub fn update_todo(&mut self, id: i64, patch: &UpdateTodo) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(is_completed) = patch.is_completed {
            todo.is_completed = is_completed;
        }
        true
    }

    /// Drop a todo from the cache. Returns whether it was present.
    pub fn delete_todo(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
