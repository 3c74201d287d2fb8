//! Pure rendering of store state to plain text.
//!
//! Every function here is a function from data to `String`; printing and
//! event handling live in the binary.

use todo_client::{Todo, TodoStore};

pub const HELP: &str = "\
commands:
  list          refresh and show all todos
  add <title>   create a new todo
  toggle <id>   flip a todo's completion flag
  rm <id>       delete a todo
  help          show this message
  quit          exit";

/// One list line per todo: completion mark, id, title.
pub fn render_item(todo: &Todo) -> String {
    let mark = if todo.is_completed { "x" } else { " " };
    format!("[{mark}] {:>3}  {}", todo.id, todo.title)
}

/// Shown in place of the list when there is nothing to do.
pub fn render_empty() -> String {
    "No todos yet.\nAdd one with: add <title>".to_string()
}

/// The whole screen: error banner (if any), list or empty state, summary.
pub fn render_dashboard(store: &TodoStore) -> String {
    let mut out = String::from("--- Todos ---\n");
    if let Some(error) = store.error() {
        out.push_str(&format!("error: {error}\n"));
    }
    if store.todos().is_empty() {
        out.push_str(&render_empty());
        return out;
    }
    for todo in store.todos() {
        out.push_str(&render_item(todo));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} completed",
        store.completed_count(),
        store.todos().len()
    ));
    out
}
