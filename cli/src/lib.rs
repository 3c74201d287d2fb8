//! Terminal frontend for the todo service.
//!
//! # Overview
//! Presents and edits the server's todo list from the terminal. The crate
//! splits the frontend the same way the rest of the workspace splits I/O
//! from logic:
//!
//! - [`session`] wires store actions to real HTTP round-trips: each action
//!   builds a request with the client core, executes it with ureq, parses
//!   the response, and only then updates the local [`todo_client::TodoStore`].
//! - [`view`] renders store state to plain text and performs no I/O.
//!
//! The binary owns the event loop: read a command, run the matching session
//! action, re-render the dashboard.

pub mod session;
pub mod view;
