//! Message types delivered to the app loop.

use crate::error::FetchError;
use crate::models::Post;

/// Messages from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The one-time post load settled.
    PostsLoaded(Result<Vec<Post>, FetchError>),
}
