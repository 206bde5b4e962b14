//! Client-side view state of the board.

use crate::error::BoardError;
use crate::types::{Post, PostId};

/// Everything the view renders. Owned by `Board`; read-only to everyone else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    /// Exactly what the last successful refresh returned, in server order.
    pub posts: Vec<Post>,
    pub compose_text: String,
    /// Always the id of a post in `posts` when set.
    pub editing_id: Option<PostId>,
    pub editing_text: String,
    pub loading: bool,
    pub error: Option<BoardError>,
}

impl ClientState {
    pub fn is_editing(&self, id: &PostId) -> bool {
        self.editing_id.as_ref() == Some(id)
    }

    pub fn find_post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub(crate) fn clear_edit(&mut self) {
        self.editing_id = None;
        self.editing_text.clear();
    }
}
