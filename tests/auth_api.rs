//! AuthApi against a mock HTTP server
//!
//! Exercises the real reqwest transport end to end: success decoding, the
//! 401 mapping, detail extraction from error bodies, and the unreachable
//! path. The last test drives the whole session manager through the real
//! transport.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vibeforum::egui_app::api::auth::{AuthApi, AuthTransport};
use vibeforum::egui_app::session::{MemorySessionStore, SessionManager};
use vibeforum::shared::error::ApiError;
use vibeforum::shared::user::{UserCreate, UserRole};

use common::{forge_token, future_exp};

#[tokio::test]
async fn request_token_decodes_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a.b.c",
            "token_type": "bearer",
        })))
        .mount(&server)
        .await;

    let api = AuthApi::new(server.uri());
    let token = api.request_token("alice", "pw").await.unwrap();
    assert_eq!(token.access_token, "a.b.c");
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn bad_credentials_map_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Incorrect username or password" })),
        )
        .mount(&server)
        .await;

    let api = AuthApi::new(server.uri());
    let err = api.request_token("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn register_conflict_surfaces_the_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "detail": "Username already registered" })),
        )
        .mount(&server)
        .await;

    let api = AuthApi::new(server.uri());
    let err = api
        .register_user(&UserCreate {
            username: "alice".to_string(),
            password: "pw".to_string(),
            role: None,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Username already registered");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn register_success_returns_the_created_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "carol",
            "password": "pw",
            "role": "moderator",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "username": "carol",
            "role": "moderator",
            "is_active": true,
        })))
        .mount(&server)
        .await;

    let api = AuthApi::new(server.uri());
    let user = api
        .register_user(&UserCreate {
            username: "carol".to_string(),
            password: "pw".to_string(),
            role: Some(UserRole::Moderator),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.role, UserRole::Moderator);
}

#[tokio::test]
async fn unreachable_server_maps_to_unreachable() {
    // nothing listens on this port
    let api = AuthApi::new("http://127.0.0.1:9");
    let err = api.request_token("alice", "pw").await.unwrap_err();
    assert!(matches!(err, ApiError::Unreachable { .. }));
}

#[tokio::test]
async fn manager_login_through_the_real_transport() {
    let token = forge_token(&json!({
        "sub": "alice",
        "role": "moderator",
        "user_id": 3,
        "exp": future_exp(),
    }));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer",
        })))
        .mount(&server)
        .await;

    let mut manager = SessionManager::new(
        Box::new(MemorySessionStore::new()),
        Box::new(AuthApi::new(server.uri())),
    )
    .await;

    let user = manager.login("alice", "pw").await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.id, 3);
    assert!(manager.is_logged_in());
    assert!(manager.is_moderator());
}
