//! Post, comment, like, and moderation endpoints
//!
//! Authenticated calls attach `Authorization: Bearer <token>`; the token
//! comes from the session manager via the caller. Reading the feed needs no
//! authentication.

use std::time::Duration;

use super::handle_response;
use crate::shared::error::ApiError;
use crate::shared::post::{Comment, CommentCreate, Post, PostCreate};

/// The feed read gets a deadline so a stalled server cannot hang the UI
/// forever; mutations are left without one.
const FEED_TIMEOUT: Duration = Duration::from_secs(8);

/// HTTP client for the forum's post endpoints.
#[derive(Debug, Clone)]
pub struct PostApi {
    client: reqwest::Client,
    base_url: String,
}

impl PostApi {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /posts`
    pub async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .client
            .get(self.url("/posts"))
            .timeout(FEED_TIMEOUT)
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/posts/{}", id)))
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }

    /// `POST /posts`
    pub async fn create_post(&self, token: &str, post: &PostCreate) -> Result<Post, ApiError> {
        let response = self
            .client
            .post(self.url("/posts"))
            .header("Authorization", format!("Bearer {}", token))
            .json(post)
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }

    /// `POST /posts/{id}/comments`
    pub async fn create_comment(
        &self,
        token: &str,
        post_id: i64,
        comment: &CommentCreate,
    ) -> Result<Comment, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/posts/{}/comments", post_id)))
            .header("Authorization", format!("Bearer {}", token))
            .json(comment)
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }

    /// `POST /posts/{id}/like`
    pub async fn like_post(&self, token: &str, post_id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/posts/{}/like", post_id)))
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response::<serde_json::Value>(response).await.map(|_| ())
    }

    /// `POST /posts/{id}/moderate?is_misleading=...` (moderators only)
    pub async fn moderate_post(
        &self,
        token: &str,
        post_id: i64,
        is_misleading: bool,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/posts/{}/moderate", post_id)))
            .header("Authorization", format!("Bearer {}", token))
            .query(&[("is_misleading", is_misleading.to_string())])
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let api = PostApi::new("http://127.0.0.1:8000");
        assert_eq!(api.url("/posts/3/like"), "http://127.0.0.1:8000/posts/3/like");
    }
}
