//! The board: local view state kept in sync with the posts API.
//!
//! # Design
//! - `Board` owns the `ClientState` and is the only thing that mutates it.
//!   Every operation takes `&mut self`, so at most one request is ever in
//!   flight per board and responses cannot interleave.
//! - Network operations open an `InFlight` scope: it raises `loading`, clears
//!   the previous error, and lowers `loading` again when dropped, on every
//!   exit path.
//! - After a successful mutation the board refetches the whole list instead
//!   of patching `posts` locally, so `posts` is always exactly what the
//!   server last returned.
//! - Failures are caught here. The `ApiError` detail goes to the log, the
//!   state keeps only the coarse `BoardError`.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::client::PostsClient;
use crate::error::{ApiError, BoardError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::state::ClientState;
use crate::types::{Post, PostId, PostInput};

/// Question put to the user before a post is deleted.
pub const DELETE_PROMPT: &str = "Really delete this post?";

/// Asks the user a yes/no question. Backed by a dialog, a terminal prompt or
/// a canned answer in tests.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct Board<T, C> {
    client: PostsClient,
    transport: T,
    confirm: C,
    state: ClientState,
}

impl<T: Transport, C: Confirm> Board<T, C> {
    /// Build a board with empty state and no request issued yet.
    pub fn new(client: PostsClient, transport: T, confirm: C) -> Self {
        Self {
            client,
            transport,
            confirm,
            state: ClientState::default(),
        }
    }

    /// Build a board and immediately load the post list.
    pub fn mount(client: PostsClient, transport: T, confirm: C) -> Self {
        let mut board = Self::new(client, transport, confirm);
        board.refresh();
        board
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Tear the board down, handing back its final state.
    pub fn unmount(self) -> ClientState {
        self.state
    }

    pub fn set_compose_text(&mut self, text: impl Into<String>) {
        self.state.compose_text = text.into();
    }

    pub fn set_editing_text(&mut self, text: impl Into<String>) {
        self.state.editing_text = text.into();
    }

    /// Replace `posts` with the server's current list.
    pub fn refresh(&mut self) {
        let mut op = self.begin("refresh");
        match op.fetch_posts() {
            Ok(posts) => op.replace_posts(posts),
            Err(e) => op.fail(BoardError::ListLoad, &e),
        }
    }

    /// Submit a new post. Blank text is ignored without a request.
    pub fn create(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let mut op = self.begin("create");
        match op.submit_create(text) {
            Ok(()) => {
                op.state.compose_text.clear();
                op.refresh();
            }
            Err(e) => op.fail(BoardError::Create, &e),
        }
    }

    /// `create` with whatever is in the compose field.
    pub fn submit_compose(&mut self) {
        let text = self.state.compose_text.clone();
        self.create(&text);
    }

    /// Delete a post once the user confirms. Declining changes nothing.
    pub fn remove(&mut self, id: &PostId) {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(%id, "delete declined");
            return;
        }
        let mut op = self.begin("delete");
        match op.submit_delete(id) {
            Ok(()) => op.refresh(),
            Err(e) => op.fail(BoardError::Delete, &e),
        }
    }

    /// Put `id` into edit mode, switching away from any other post.
    pub fn begin_edit(&mut self, id: PostId, current_text: impl Into<String>) {
        if self.state.find_post(&id).is_none() {
            warn!(%id, "edit requested for a post that is not on the board");
            return;
        }
        self.state.editing_id = Some(id);
        self.state.editing_text = current_text.into();
    }

    /// Save the post being edited. Blank text, or no edit in progress, is a
    /// no-op. On failure the post stays in edit mode so the user can retry.
    pub fn commit_edit(&mut self) {
        let Some(id) = self.state.editing_id.clone() else {
            return;
        };
        if self.state.editing_text.trim().is_empty() {
            return;
        }
        let text = self.state.editing_text.clone();
        let mut op = self.begin("update");
        match op.submit_update(&id, &text) {
            Ok(()) => {
                op.state.clear_edit();
                op.refresh();
            }
            Err(e) => op.fail(BoardError::Update, &e),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.clear_edit();
    }

    fn begin(&mut self, operation: &'static str) -> InFlight<'_, T, C> {
        debug!(operation, "request started");
        self.state.loading = true;
        self.state.error = None;
        InFlight { board: self, operation }
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "response received");
        Ok(response)
    }

    fn fetch_posts(&mut self) -> Result<Vec<Post>, ApiError> {
        let request = self.client.build_list_posts();
        let response = self.round_trip(request)?;
        self.client.parse_list_posts(response)
    }

    fn submit_create(&mut self, text: &str) -> Result<(), ApiError> {
        let request = self.client.build_create_post(&PostInput::new(text))?;
        let response = self.round_trip(request)?;
        self.client.parse_create_post(response)
    }

    fn submit_update(&mut self, id: &PostId, text: &str) -> Result<(), ApiError> {
        let request = self.client.build_update_post(id, &PostInput::new(text))?;
        let response = self.round_trip(request)?;
        self.client.parse_update_post(response)
    }

    fn submit_delete(&mut self, id: &PostId) -> Result<(), ApiError> {
        let request = self.client.build_delete_post(id);
        let response = self.round_trip(request)?;
        self.client.parse_delete_post(response)
    }

    fn replace_posts(&mut self, posts: Vec<Post>) {
        self.state.posts = posts;
        // The post being edited may have been deleted elsewhere.
        let vanished = self
            .state
            .editing_id
            .as_ref()
            .is_some_and(|id| self.state.find_post(id).is_none());
        if vanished {
            debug!("edited post disappeared, leaving edit mode");
            self.state.clear_edit();
        }
    }

    fn fail(&mut self, kind: BoardError, cause: &ApiError) {
        warn!(error = %cause, "{kind}");
        self.state.error = Some(kind);
    }
}

/// Scope of one network operation. Lowers `loading` on drop.
struct InFlight<'a, T, C> {
    board: &'a mut Board<T, C>,
    operation: &'static str,
}

impl<T, C> Deref for InFlight<'_, T, C> {
    type Target = Board<T, C>;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl<T, C> DerefMut for InFlight<'_, T, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl<T, C> Drop for InFlight<'_, T, C> {
    fn drop(&mut self) {
        self.board.state.loading = false;
        debug!(operation = self.operation, "request settled");
    }
}
