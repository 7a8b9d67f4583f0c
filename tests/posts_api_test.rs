//! Posts endpoint tests using wiremock.
//!
//! These tests run the reqwest-backed `PostsApi` against a local mock server
//! and check the request shape and every failure mode the view handles.

mod common;

use common::{fruit_posts, posts_json};
use postboard::app::{App, AppMessage};
use postboard::error::FetchError;
use postboard::loader::PostsApi;
use postboard::view_state::Theme;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn posts_url(server: &MockServer) -> String {
    format!("{}/posts", server.uri())
}

#[tokio::test]
async fn test_fetch_posts_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(posts_json(&fruit_posts())),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = PostsApi::new(posts_url(&mock_server));
    let posts = api.fetch_posts().await;

    assert!(posts.is_ok(), "Expected Ok, got Err: {:?}", posts);
    let posts = posts.unwrap();
    assert_eq!(posts.len(), 13);
    // server order is preserved
    assert_eq!(posts[0].title, "kiwi");
    assert_eq!(posts[12].id, 13);
}

#[tokio::test]
async fn test_fetch_sends_no_auth_or_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let api = PostsApi::new(posts_url(&mock_server));
    assert!(api.fetch_posts().await.unwrap().is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_fetch_posts_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let api = PostsApi::new(posts_url(&mock_server));
    let result = api.fetch_posts().await;

    match result {
        Err(FetchError::Status { status }) => assert_eq!(status, 500),
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_posts_not_found() {
    let mock_server = MockServer::start().await;

    let api = PostsApi::new(format!("{}/missing", mock_server.uri()));
    let result = api.fetch_posts().await;

    assert!(matches!(result, Err(FetchError::Status { status: 404 })));
}

#[tokio::test]
async fn test_fetch_posts_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let api = PostsApi::new(posts_url(&mock_server));
    let result = api.fetch_posts().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_posts_connection_refused() {
    // Nothing listens on port 1
    let api = PostsApi::new("http://127.0.0.1:1/posts");
    let result = api.fetch_posts().await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_mounted_app_settles_after_failed_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(PostsApi::new(posts_url(&mock_server)), Theme::Light);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::PostsLoaded(Err(_))));
    app.handle_message(message);

    assert!(!app.view.is_loading());
    assert!(app.view.items().is_empty());
    assert!(!app.view.is_dialog_visible());
    assert!(app.view.snapshot().visible_items.is_empty());
}

#[tokio::test]
async fn test_mounted_app_loads_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(posts_json(&fruit_posts())))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(PostsApi::new(posts_url(&mock_server)), Theme::Light);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();
    app.mount();

    let message = rx.recv().await.unwrap();
    app.handle_message(message);

    assert_eq!(app.view.items().len(), 13);
    assert_eq!(app.view.page_count(), 3);
}
