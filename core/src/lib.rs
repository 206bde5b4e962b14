//! Client core for a minimal bulletin board.
//!
//! # Overview
//! Lists, creates, edits and deletes posts against a REST backend and keeps
//! a local view state in sync with it.
//!
//! # Design
//! - `PostsClient` is a stateless codec: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse` (host-does-IO pattern).
//! - `Transport` is the one seam where the host performs the round-trip.
//! - `Board` owns `ClientState` and runs each operation as exactly one
//!   request, followed by a full refresh after every successful mutation.
//! - `render` turns a state into the text the frontend prints.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod board;
pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod types;

pub use board::{Board, Confirm, DELETE_PROMPT};
pub use client::PostsClient;
pub use error::{ApiError, BoardError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render, View};
pub use state::ClientState;
pub use types::{Post, PostId, PostInput};
