//! HTTP client wrapper - the list and create calls against the posts endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::constants::JSON_CONTENT_TYPE;
use crate::models::Post;
use crate::network::error::TransportError;

/// The two operations the app needs from the remote service
#[async_trait]
pub trait PostTransport: Send + Sync + 'static {
    /// GET the full list of posts
    async fn fetch_posts(&self) -> Result<Vec<Post>, TransportError>;

    /// POST a draft and return the server's copy, including its new id
    async fn create_post(&self, draft: &Post) -> Result<Post, TransportError>;
}

/// `reqwest` backed transport bound to one base URL
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        PostsClient {
            client: create_client(timeout),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PostTransport for PostsClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, TransportError> {
        let result = self.get_posts().await;
        if let Err(e) = &result {
            tracing::error!(url = %self.base_url, error = %e, "Error fetching posts");
        }
        result
    }

    async fn create_post(&self, draft: &Post) -> Result<Post, TransportError> {
        let result = self.post_draft(draft).await;
        if let Err(e) = &result {
            tracing::error!(url = %self.base_url, error = %e, "Error creating post");
        }
        result
    }
}

impl PostsClient {
    async fn get_posts(&self) -> Result<Vec<Post>, TransportError> {
        let resp = self.client.get(&self.base_url).send().await?;
        decode_response(resp).await
    }

    async fn post_draft(&self, draft: &Post) -> Result<Post, TransportError> {
        let body = serde_json::to_string(draft)?;
        let resp = self
            .client
            .post(&self.base_url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        decode_response(resp).await
    }
}

/// Check the status, then decode the body into `T`
async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TransportError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    let value = serde_json::from_str(&body)?;
    Ok(value)
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/posts", addr)
    }

    fn client_for(url: String) -> PostsClient {
        PostsClient::new(url, Duration::from_secs(5))
    }

    async fn list_posts() -> Json<Value> {
        Json(json!([
            {"userId": 1, "id": 1, "title": "first", "body": "one"},
            {"userId": 2, "id": 2, "title": "second", "body": "two"}
        ]))
    }

    // Echoes the draft back with an id, rejecting anything that is not a
    // JSON draft with the expected content type.
    async fn create_post(headers: HeaderMap, body: String) -> Response {
        let content_type = headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if content_type != JSON_CONTENT_TYPE {
            return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
        }
        let Ok(mut value) = serde_json::from_str::<Value>(&body) else {
            return StatusCode::BAD_REQUEST.into_response();
        };
        if value.get("id").is_some() {
            return StatusCode::BAD_REQUEST.into_response();
        }
        value["id"] = json!(101);
        (StatusCode::CREATED, Json(value)).into_response()
    }

    #[tokio::test]
    async fn test_fetch_posts_decodes_list() {
        let url = spawn_server(Router::new().route("/posts", get(list_posts))).await;
        let posts = client_for(url).fetch_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, Some(1));
        assert_eq!(posts[1].title, "second");
        assert_eq!(posts[1].user_id, 2);
    }

    #[tokio::test]
    async fn test_fetch_posts_non_success_status() {
        let app = Router::new().route("/posts", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let url = spawn_server(app).await;

        let err = client_for(url).fetch_posts().await.unwrap_err();
        assert_eq!(err, TransportError::Status { status: 500 });
    }

    #[tokio::test]
    async fn test_fetch_posts_malformed_body() {
        let app = Router::new().route("/posts", get(|| async { "definitely not json" }));
        let url = spawn_server(app).await;

        let err = client_for(url).fetch_posts().await.unwrap_err();
        assert!(matches!(err, TransportError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_posts_shape_mismatch() {
        let app = Router::new().route("/posts", get(|| async { Json(json!([{"id": 1}])) }));
        let url = spawn_server(app).await;

        let err = client_for(url).fetch_posts().await.unwrap_err();
        assert!(matches!(err, TransportError::Parse(_)));
    }

    #[tokio::test]
    async fn test_create_post_sends_json_and_returns_created() {
        let app = Router::new().route("/posts", get(list_posts).post(create_post));
        let url = spawn_server(app).await;

        let draft = Post {
            title: "T".into(),
            body: "B".into(),
            ..Post::default()
        };
        let created = client_for(url).create_post(&draft).await.unwrap();

        assert_eq!(
            created,
            Post {
                id: Some(101),
                title: "T".into(),
                body: "B".into(),
                user_id: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_create_post_non_success_status() {
        let app = Router::new().route(
            "/posts",
            axum::routing::post(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
        );
        let url = spawn_server(app).await;

        let err = client_for(url).create_post(&Post::default()).await.unwrap_err();
        assert_eq!(err, TransportError::Status { status: 422 });
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{}/posts", addr))
            .fetch_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
