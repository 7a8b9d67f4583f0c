//! Data models shared across the application.

mod post;

pub use post::Post;
