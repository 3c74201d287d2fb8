//! REST service for the todo application.
//!
//! # Overview
//! Exposes CRUD endpoints under `/api/todos` over an in-memory [`TodoList`]
//! shared behind `Arc<RwLock<_>>`. State lives for the lifetime of the
//! process; there is no persistence layer.
//!
//! # Design
//! - Handlers stay thin: they lock the list, delegate to a [`TodoList`]
//!   method, and map `Option`/`bool` results to status codes.
//! - Missing todos are plain `404`s with no body; malformed JSON is rejected
//!   by the `Json` extractor before a handler runs.
//! - CORS is open to the local dev frontend origins so a browser client on
//!   another port can talk to the service directly.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod store;

pub use store::{CreateTodo, Todo, TodoList, UpdateTodo};

pub type Db = Arc<RwLock<TodoList>>;

#[derive(Serialize)]
struct Hello {
    message: String,
}

/// Build the application router with a fresh, empty todo list.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoList::new()));
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> Json<Hello> {
    Json(Hello {
        message: "Hello from Backend!".to_string(),
    })
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.all().to_vec())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, [(header::HeaderName, String); 1], Json<Todo>) {
    let todo = db.write().await.create(input.title);
    tracing::info!(id = todo.id, "created todo");
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/todos/{}", todo.id))],
        Json(todo),
    )
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.get(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    match todos.update(id, input) {
        Some(todo) => {
            tracing::info!(id, "updated todo");
            Ok(Json(todo))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    if todos.delete(id) {
        tracing::info!(id, "deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
