//! In-memory todo collection.
//!
//! # Design
//! `TodoList` owns the ordered list and the id counter; every handler goes
//! through its methods, so the CRUD semantics are unit-testable without HTTP.
//! Ids start at 1 and only ever increment — deleting a todo never frees its
//! id for reuse. The `Vec` preserves creation order, which is also the order
//! the list endpoint returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as stored and as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo. The server fills in everything
/// except the title.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating an existing todo. Omitted fields remain
/// unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

/// Ordered todo collection with monotonically assigned ids.
#[derive(Debug)]
pub struct TodoList {
    todos: Vec<Todo>,
    next_id: i64,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Append a new todo with the next id, `is_completed` false, and
    /// `created_at` set to the current time.
    pub fn create(&mut self, title: String) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title,
            is_completed: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Apply a partial update. Returns the updated todo, or `None` if no todo
    /// with `id` exists.
    pub fn update(&mut self, id: i64, update: UpdateTodo) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(is_completed) = update.is_completed {
            todo.is_completed = is_completed;
        }
        Some(todo.clone())
    }

    /// Remove the todo with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
