//! HTTP clients for the forum backend
//!
//! One thin method per endpoint, nothing clever. `auth` covers the token
//! and registration endpoints behind the [`auth::AuthTransport`] trait so
//! the session manager can be tested against a fake; `posts` is the feed,
//! comment, like, and moderation surface.

pub mod auth;
pub mod posts;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::shared::error::ApiError;

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Map a response to the shared error taxonomy, extracting the backend's
/// `detail` message when the body carries one.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await.map_err(ApiError::from)?;
        return serde_json::from_str(&body).map_err(ApiError::from);
    }
    if status.as_u16() == 401 {
        return Err(ApiError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    let detail = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.detail,
        Err(_) if !body.is_empty() => body,
        Err(_) => status.to_string(),
    };
    Err(ApiError::api(status.as_u16(), detail))
}
