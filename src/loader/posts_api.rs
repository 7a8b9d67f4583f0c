//! Client for the posts endpoint.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::FetchError;
use crate::models::Post;
use crate::traits::{Headers, HttpClient};

/// Public endpoint serving the post list.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Reads the full post list with a single GET.
///
/// No query parameters, headers, or auth are sent. The body is decoded as one
/// JSON array; there is no streaming or paging on the wire.
#[derive(Clone)]
pub struct PostsApi {
    client: Arc<dyn HttpClient>,
    endpoint: String,
}

impl std::fmt::Debug for PostsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsApi")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PostsApi {
    /// Client backed by reqwest.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Arc::new(ReqwestHttpClient::new()), endpoint)
    }

    /// Client backed by any [`HttpClient`], e.g. a mock in tests.
    pub fn with_client(client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch every post, in server order.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self.client.get(&self.endpoint, &Headers::new()).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const URL: &str = "http://mock/posts";

    fn api_with(response: MockResponse) -> (PostsApi, MockHttpClient) {
        let mock = MockHttpClient::new();
        mock.set_response(URL, response);
        (PostsApi::with_client(Arc::new(mock.clone()), URL), mock)
    }

    #[tokio::test]
    async fn test_fetch_posts_success() {
        let (api, mock) = api_with(MockResponse::json(
            r#"[{"userId":1,"id":1,"title":"first","body":"one"}]"#,
        ));

        let posts = api.fetch_posts().await.unwrap();
        assert_eq!(posts, vec![Post::new(1, "first", "one")]);

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_posts_empty_array() {
        let (api, _) = api_with(MockResponse::json("[]"));
        assert!(api.fetch_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_posts_non_success_status() {
        let (api, _) = api_with(MockResponse::Success(Response::new(404, "{}")));
        let err = api.fetch_posts().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_posts_invalid_json() {
        let (api, _) = api_with(MockResponse::json("<html>oops</html>"));
        let err = api.fetch_posts().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_posts_object_instead_of_array() {
        let (api, _) = api_with(MockResponse::json(r#"{"id":1,"title":"x","body":"y"}"#));
        assert!(matches!(
            api.fetch_posts().await.unwrap_err(),
            FetchError::Decode(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_posts_transport_error() {
        let (api, _) = api_with(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        assert!(matches!(
            api.fetch_posts().await.unwrap_err(),
            FetchError::Transport(HttpError::ConnectionFailed(_))
        ));
    }
}
