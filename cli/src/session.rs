//! Store actions wired to real HTTP round-trips.
//!
//! # Design
//! `Session` owns the three pieces the frontend needs: a `TodoClient` to
//! build and parse, a ureq agent to execute, and a `TodoStore` holding the
//! last server-confirmed state. Each action follows the same shape as the
//! original flow: build request → execute → parse → update store. On failure
//! the store records a single user-facing message and the error is returned
//! to the caller.

use thiserror::Error;
use todo_client::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoStore, UpdateTodo,
};

/// Errors surfaced by session actions: either the transport failed before a
/// response arrived, or the client core rejected the response.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(String),
}

pub struct Session {
    client: TodoClient,
    store: TodoStore,
    agent: ureq::Agent,
}

impl Session {
    pub fn new(base_url: &str) -> Self {
        // Keep 4xx/5xx as data so the client core interprets statuses.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: TodoClient::new(base_url),
            store: TodoStore::new(),
            agent,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Execute a built request over the wire.
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, SessionError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                self.agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                self.agent.put(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| SessionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }

    /// Refresh the whole cache from the server.
    pub fn fetch_todos(&mut self) -> Result<(), SessionError> {
        self.store.set_loading(true);
        self.store.clear_error();
        let result = self
            .execute(self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp).map_err(SessionError::from));
        self.store.set_loading(false);
        match result {
            Ok(todos) => {
                self.store.set_todos(todos);
                Ok(())
            }
            Err(err) => {
                self.store.set_error(format!("Failed to fetch todos: {err}"));
                Err(err)
            }
        }
    }

    /// Create a todo from `title` and append the server's record to the
    /// cache. Blank titles are ignored without a round-trip.
    pub fn create_todo(&mut self, title: &str) -> Result<(), SessionError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        let input = CreateTodo {
            title: title.to_string(),
        };
        let result = self
            .client
            .build_create_todo(&input)
            .map_err(SessionError::from)
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_create_todo(resp).map_err(SessionError::from));
        match result {
            Ok(todo) => {
                self.store.add_todo(todo);
                Ok(())
            }
            Err(err) => {
                self.store.set_error(format!("Failed to create todo: {err}"));
                Err(err)
            }
        }
    }

    /// Flip the completion flag of a cached todo on the server, then patch
    /// the cache. Unknown ids are ignored.
    pub fn toggle_todo(&mut self, id: i64) -> Result<(), SessionError> {
        let Some(todo) = self.store.get(id) else {
            return Ok(());
        };
        let patch = UpdateTodo {
            title: None,
            is_completed: Some(!todo.is_completed),
        };
        let result = self
            .client
            .build_update_todo(id, &patch)
            .map_err(SessionError::from)
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_update_todo(resp).map_err(SessionError::from));
        match result {
            Ok(_) => {
                self.store.update_todo(id, &patch);
                Ok(())
            }
            Err(err) => {
                self.store.set_error(format!("Failed to update todo: {err}"));
                Err(err)
            }
        }
    }

    /// Delete a todo on the server, then drop it from the cache.
    pub fn remove_todo(&mut self, id: i64) -> Result<(), SessionError> {
        let result = self
            .execute(self.client.build_delete_todo(id))
            .and_then(|resp| self.client.parse_delete_todo(resp).map_err(SessionError::from));
        match result {
            Ok(()) => {
                self.store.delete_todo(id);
                Ok(())
            }
            Err(err) => {
                self.store.set_error(format!("Failed to delete todo: {err}"));
                Err(err)
            }
        }
    }
}
