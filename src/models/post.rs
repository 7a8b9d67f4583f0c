//! Post record returned by the posts endpoint.

use serde::{Deserialize, Serialize};

/// A single post as served by the remote API.
///
/// Posts are immutable once fetched. Unknown fields in the payload (such as
/// `userId`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
