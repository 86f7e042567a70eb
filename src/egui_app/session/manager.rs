//! Session lifecycle manager
//!
//! The single owner of "who is logged in right now". Holds the
//! (token, user) pair, keeps it consistent with the session store, and
//! broadcasts every transition to subscribers. Collaborators (store and
//! auth transport) are injected so tests can run entirely on fakes.
//!
//! # State machine
//!
//! Two states: Anonymous and Authenticated(user). Construction rehydrates
//! from the store (valid persisted token + readable user record), `login`
//! moves to Authenticated, `logout`/`clear_session` move to Anonymous.
//! The pair is all-or-nothing: observers never see a token without a user
//! or a user without a token.
//!
//! # Broadcast
//!
//! `subscribe` hands back a channel that immediately replays the latest
//! transition, then delivers every subsequent one in production order,
//! with no coalescing and no drops. The UI thread drains its receiver
//! once per frame.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::egui_app::api::auth::AuthTransport;
use crate::shared::error::ApiError;
use crate::shared::user::{User, UserCreate, UserRole};

use super::claims::Claims;
use super::store::{SessionStore, CURRENT_USER_KEY, TOKEN_KEY};
use super::validity::is_token_valid;

/// The authoritative (token, user) pair. Invariant: both present or both
/// absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Why a transition happened. The view layer navigates back to the login
/// view on `LoggedOut` only; `Cleared` invalidates state in place so an
/// error view stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCause {
    Rehydrated,
    LoggedIn,
    LoggedOut,
    Cleared,
}

/// One broadcast transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionNotice {
    pub state: SessionState,
    pub cause: SessionCause,
}

/// Owner of the session state machine.
pub struct SessionManager {
    store: Box<dyn SessionStore>,
    transport: Box<dyn AuthTransport>,
    state: SessionState,
    last_notice: SessionNotice,
    subscribers: Vec<Sender<SessionNotice>>,
}

impl SessionManager {
    /// Construct and rehydrate. A valid persisted token with a readable
    /// user record enters Authenticated; anything else (expired token,
    /// malformed token, missing or corrupt user) scrubs both store slots
    /// and enters Anonymous.
    pub async fn new(store: Box<dyn SessionStore>, transport: Box<dyn AuthTransport>) -> Self {
        let state = rehydrate(store.as_ref()).await;
        tracing::debug!(
            authenticated = state.is_authenticated(),
            "session manager initialized"
        );
        let last_notice = SessionNotice {
            state: state.clone(),
            cause: SessionCause::Rehydrated,
        };
        Self {
            store,
            transport,
            state,
            last_notice,
            subscribers: Vec::new(),
        }
    }

    /// `POST /token`, then establish the session from the returned token.
    /// On transport failure nothing changes; the caller decides how to
    /// react (the UI convention is to `clear_session` so a failed attempt
    /// always lands on Anonymous).
    pub async fn login(&mut self, username: &str, password: &str) -> Result<User, ApiError> {
        let token = self.transport.request_token(username, password).await?;
        Ok(self.complete_login(&token.access_token, username).await)
    }

    /// Completion half of `login`: decode claims, build the user record,
    /// persist, update the cell, notify. Runs on the caller's thread so
    /// the whole mutation is atomic with respect to other operations.
    ///
    /// `username` is the name the login was attempted with; it is only
    /// used when the token carries no `sub` claim.
    pub async fn complete_login(&mut self, access_token: &str, username: &str) -> User {
        let claims = Claims::decode(access_token);
        let user = User {
            id: claims.user_id().unwrap_or(0),
            username: claims
                .sub()
                .map(str::to_string)
                .unwrap_or_else(|| username.to_string()),
            role: claims.role().unwrap_or_default(),
            is_active: true,
        };

        if !self.store.persistent() {
            // no durable storage in this environment: stay anonymous
            // rather than hold a session that cannot survive a restart
            tracing::debug!("no persistent store, session not established");
            return user;
        }

        self.store.set(TOKEN_KEY, access_token).await;
        match serde_json::to_string(&user) {
            Ok(raw) => self.store.set(CURRENT_USER_KEY, &raw).await,
            Err(e) => tracing::warn!("cannot serialize user record: {e}"),
        }
        self.state = SessionState::authenticated(access_token.to_string(), user.clone());
        self.notify(SessionCause::LoggedIn);
        tracing::info!(username = %user.username, "logged in");
        user
    }

    /// `POST /register`. Pure pass-through: session state never changes
    /// here. Callers conventionally chain `login` on success.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<UserRole>,
    ) -> Result<User, ApiError> {
        self.transport
            .register_user(&UserCreate {
                username: username.to_string(),
                password: password.to_string(),
                role,
            })
            .await
    }

    /// Clear the session and broadcast `LoggedOut`; the view layer
    /// returns to the login view on that cause.
    pub async fn logout(&mut self) {
        self.reset(SessionCause::LoggedOut).await;
        tracing::info!("logged out");
    }

    /// Same clearing as `logout` but broadcast as `Cleared`: no
    /// navigation, for error handlers that invalidate local state while
    /// keeping the current view on screen.
    pub async fn clear_session(&mut self) {
        self.reset(SessionCause::Cleared).await;
    }

    async fn reset(&mut self, cause: SessionCause) {
        self.store.remove(TOKEN_KEY).await;
        self.store.remove(CURRENT_USER_KEY).await;
        self.state = SessionState::anonymous();
        self.notify(cause);
    }

    /// Live query: token still valid right now, and a user is present.
    pub fn is_logged_in(&self) -> bool {
        is_token_valid(self.state.token.as_deref()) && self.state.user.is_some()
    }

    /// Whether the current user may moderate posts.
    pub fn is_moderator(&self) -> bool {
        self.state
            .user
            .as_ref()
            .is_some_and(|u| u.role == UserRole::Moderator)
    }

    /// The raw bearer token for `Authorization` headers, if any.
    pub fn token(&self) -> Option<String> {
        self.state.token.clone()
    }

    /// Snapshot of the current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.user.clone()
    }

    /// Snapshot of the full state pair.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Subscribe to transitions. The latest notice is replayed
    /// immediately, so late subscribers always start with a value.
    pub fn subscribe(&mut self) -> Receiver<SessionNotice> {
        let (tx, rx) = channel();
        let _ = tx.send(self.last_notice.clone());
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, cause: SessionCause) {
        let notice = SessionNotice {
            state: self.state.clone(),
            cause,
        };
        self.last_notice = notice.clone();
        // prune subscribers whose receiving end is gone
        self.subscribers
            .retain(|tx| tx.send(notice.clone()).is_ok());
        tracing::debug!(
            ?cause,
            authenticated = self.state.is_authenticated(),
            "session transition"
        );
    }
}

async fn rehydrate(store: &dyn SessionStore) -> SessionState {
    if let Some(token) = store.get(TOKEN_KEY).await {
        if is_token_valid(Some(&token)) {
            if let Some(raw) = store.get(CURRENT_USER_KEY).await {
                if let Ok(user) = serde_json::from_str::<User>(&raw) {
                    return SessionState::authenticated(token, user);
                }
            }
            tracing::warn!("valid token but unreadable user record, clearing session");
        }
        store.remove(TOKEN_KEY).await;
        store.remove(CURRENT_USER_KEY).await;
    }
    SessionState::anonymous()
}
