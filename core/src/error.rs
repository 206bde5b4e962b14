//! Error types for the posts API client and the board.
//!
//! # Design
//! Two layers. `ApiError` is what the codec and the transport report: it
//! keeps the status code and body for diagnostics. `BoardError` is what the
//! user sees: one coarse kind per operation, whose `Display` is the fixed
//! message shown on the error line. The board logs the `ApiError` and keeps
//! only the `BoardError`.

use thiserror::Error;

/// Errors returned by `PostsClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404, the requested post does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// User-facing failure of a board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Failed to load posts")]
    ListLoad,

    #[error("Failed to create post")]
    Create,

    #[error("Failed to delete post")]
    Delete,

    #[error("Failed to update post")]
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_errors_render_fixed_messages() {
        assert_eq!(BoardError::ListLoad.to_string(), "Failed to load posts");
        assert_eq!(BoardError::Create.to_string(), "Failed to create post");
        assert_eq!(BoardError::Delete.to_string(), "Failed to delete post");
        assert_eq!(BoardError::Update.to_string(), "Failed to update post");
    }

    #[test]
    fn http_error_keeps_status_and_body() {
        let err = ApiError::HttpError {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
    }
}
