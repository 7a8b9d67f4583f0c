//! Loading posts from the remote endpoint.
//!
//! [`PostsApi`] performs the GET; [`spawn_post_loader`] runs it once in the
//! background and reports back over the app message channel.

mod posts_api;
mod task;

pub use posts_api::{PostsApi, DEFAULT_ENDPOINT};
pub use task::{spawn_post_loader, LoadHandle};
