//! Authentication endpoints
//!
//! HTTP client functions for login and registration. The session manager
//! only sees the [`AuthTransport`] trait; [`AuthApi`] is the real
//! implementation against the backend.

use async_trait::async_trait;
use serde::Serialize;

use super::handle_response;
use crate::shared::error::ApiError;
use crate::shared::user::{TokenResponse, User, UserCreate};

/// Transport collaborator for the session manager.
///
/// `request_token` hits `POST /token` and must distinguish unreachable /
/// unauthorized / other failures through [`ApiError`]. `register_user`
/// hits `POST /register` and never touches session state.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError>;

    async fn register_user(&self, user: &UserCreate) -> Result<User, ApiError>;
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Real transport against the forum backend.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl AuthApi {
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
}

#[async_trait]
impl AuthTransport for AuthApi {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/token"))
            .json(&Credentials { username, password })
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }

    async fn register_user(&self, user: &UserCreate) -> Result<User, ApiError> {
        let response = self
            .client
            .post(self.url("/register"))
            .json(user)
            .send()
            .await
            .map_err(ApiError::from)?;

        handle_response(response).await
    }
}
