//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{fruit_posts, TestAppBuilder};
//!
//! let app = TestAppBuilder::new().with_posts(fruit_posts()).build();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use postboard::adapters::mock::{MockHttpClient, MockResponse};
use postboard::app::{App, AppMessage};
use postboard::error::FetchError;
use postboard::loader::PostsApi;
use postboard::models::Post;
use postboard::view_state::Theme;

pub const MOCK_ENDPOINT: &str = "http://mock.local/posts";

/// Thirteen posts with distinct fruit titles, deliberately unsorted.
pub const FRUIT_TITLES: [&str; 13] = [
    "kiwi", "apple", "mango", "banana", "cherry", "lemon", "grape", "fig", "date", "elder",
    "honeydew", "imbe", "jujube",
];

pub fn fruit_posts() -> Vec<Post> {
    FRUIT_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| Post::new(i as i64 + 1, *title, format!("about {}", title)))
        .collect()
}

/// `n` posts titled "post 01", "post 02", ...
pub fn numbered_posts(n: usize) -> Vec<Post> {
    (1..=n)
        .map(|i| Post::new(i as i64, format!("post {:02}", i), "body"))
        .collect()
}

/// JSON the remote endpoint would return for `posts`, with the extra
/// `userId` field the real API carries.
pub fn posts_json(posts: &[Post]) -> String {
    let values: Vec<serde_json::Value> = posts
        .iter()
        .map(|p| {
            serde_json::json!({
                "userId": 1,
                "id": p.id,
                "title": p.title,
                "body": p.body,
            })
        })
        .collect();
    serde_json::Value::Array(values).to_string()
}

/// Builder for creating test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    theme: Theme,
    result: Option<Result<Vec<Post>, FetchError>>,
    size: Option<(u16, u16)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Deliver these posts as if the fetch had succeeded.
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.result = Some(Ok(posts));
        self
    }

    /// Deliver a failed fetch.
    pub fn with_failure(mut self, error: FetchError) -> Self {
        self.result = Some(Err(error));
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Build the app. Without posts or a failure the app stays loading.
    pub fn build(self) -> App {
        let mut app = App::new(mock_api(MockHttpClient::new()), self.theme);
        if let Some((width, height)) = self.size {
            app.update_terminal_dimensions(width, height);
        }
        if let Some(result) = self.result {
            app.handle_message(AppMessage::PostsLoaded(result));
        }
        app
    }
}

pub fn mock_api(client: MockHttpClient) -> PostsApi {
    PostsApi::with_client(Arc::new(client), MOCK_ENDPOINT)
}

/// Mock client answering the endpoint with `posts`.
pub fn serving(posts: &[Post]) -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_response(MOCK_ENDPOINT, MockResponse::json(&posts_json(posts)));
    client
}

pub fn titles(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|p| p.title.clone()).collect()
}
