//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Post ids are server-assigned and opaque to the client: backends hand out
//! numbers (of any sign or precision) or strings, so `PostId` keeps the JSON
//! value as received and only ever renders it back into request paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        PostId::Number(n.into())
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId::Text(s.to_string())
    }
}

/// A single board entry returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub text: String,
}

/// Request payload for both creating and updating a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostInput {
    pub text: String,
}

impl PostInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
