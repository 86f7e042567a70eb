//! Central application state shared across egui views.
//!
//! All mutation happens on the UI thread. Network calls run on the tokio
//! runtime and report back through a channel that `process_events` drains
//! once per frame, so every session transition is applied atomically with
//! respect to everything else the app does.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::egui_app::api::auth::{AuthApi, AuthTransport};
use crate::egui_app::api::posts::PostApi;
use crate::egui_app::config::Config;
use crate::egui_app::session::{
    default_store, SessionCause, SessionManager, SessionNotice, SessionState,
};
use crate::egui_app::types::AppView;
use crate::shared::error::ApiError;
use crate::shared::post::{Comment, CommentCreate, Post, PostCreate};
use crate::shared::user::{UserCreate, UserRole};
use crate::shared::vibe::{vibe_for_comments, Vibe};

/// Completion messages from worker tasks back to the UI thread.
enum AppEvent {
    AuthFinished {
        result: Result<(String, String), ApiError>,
        registering: bool,
    },
    PostsLoaded(Result<Vec<Post>, ApiError>),
    PostCreated(Result<Post, ApiError>),
    CommentCreated {
        post_id: i64,
        result: Result<Comment, ApiError>,
    },
    PostLiked {
        post_id: i64,
        result: Result<(), ApiError>,
    },
    PostModerated {
        new_status: bool,
        result: Result<(), ApiError>,
    },
}

pub struct AppState {
    pub config: Config,
    runtime: tokio::runtime::Runtime,
    pub manager: SessionManager,
    session_rx: Receiver<SessionNotice>,
    /// Snapshot of the latest broadcast state, for rendering.
    pub session: SessionState,
    pub current_view: AppView,

    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    auth_api: AuthApi,
    post_api: PostApi,

    // login / register form
    pub username_input: String,
    pub password_input: String,
    pub is_register_mode: bool,
    pub selected_role: UserRole,
    pub auth_error: Option<String>,
    pub auth_loading: bool,

    // posts feed
    pub posts: Vec<Post>,
    pub posts_loading: bool,
    pub posts_error: Option<String>,
    pub vibes_by_post: HashMap<i64, Vibe>,
    pub new_post_title: String,
    pub new_post_content: String,
    pub is_creating_post: bool,
    pub new_comment_inputs: HashMap<i64, String>,
    pub liked_posts: HashSet<i64>,
    pub expanded_comments: HashSet<i64>,
    pub status_banner: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

        let auth_api = AuthApi::new(config.server_url());
        let post_api = PostApi::new(config.server_url());

        let mut manager = runtime.block_on(async {
            let store = default_store().await;
            SessionManager::new(store, Box::new(AuthApi::new(config.server_url()))).await
        });
        let session_rx = manager.subscribe();
        let session = manager.state().clone();

        // a still-valid rehydrated session goes straight to the feed
        let current_view = if manager.is_logged_in() {
            AppView::Posts
        } else {
            AppView::Login
        };

        let (events_tx, events_rx) = channel();

        let mut state = Self {
            config,
            runtime,
            manager,
            session_rx,
            session,
            current_view,
            events_tx,
            events_rx,
            auth_api,
            post_api,
            username_input: String::new(),
            password_input: String::new(),
            is_register_mode: false,
            selected_role: UserRole::Regular,
            auth_error: None,
            auth_loading: false,
            posts: Vec::new(),
            posts_loading: false,
            posts_error: None,
            vibes_by_post: HashMap::new(),
            new_post_title: String::new(),
            new_post_content: String::new(),
            is_creating_post: false,
            new_comment_inputs: HashMap::new(),
            liked_posts: HashSet::new(),
            expanded_comments: HashSet::new(),
            status_banner: None,
        };

        if state.current_view == AppView::Posts {
            state.load_posts();
        }
        state
    }

    /// Drain session notices and worker completions. Called once per frame
    /// before rendering.
    pub fn process_events(&mut self) {
        while let Ok(notice) = self.session_rx.try_recv() {
            self.session = notice.state.clone();
            if notice.cause == SessionCause::LoggedOut {
                self.current_view = AppView::Login;
            }
        }

        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthFinished { result, registering } => {
                self.auth_loading = false;
                match result {
                    Ok((access_token, username)) => {
                        self.runtime
                            .block_on(self.manager.complete_login(&access_token, &username));
                        self.auth_error = None;
                        self.password_input.clear();
                        self.is_register_mode = false;
                        self.current_view = AppView::Posts;
                        self.load_posts();
                    }
                    Err(e) => {
                        // convention: a failed attempt always lands on a
                        // fully cleared session
                        self.runtime.block_on(self.manager.clear_session());
                        self.auth_error = Some(auth_error_message(&e, registering));
                        tracing::error!("authentication failed: {e}");
                    }
                }
            }
            AppEvent::PostsLoaded(result) => {
                self.posts_loading = false;
                match result {
                    Ok(mut posts) => {
                        posts.sort_by(|a, b| b.created_at_utc().cmp(&a.created_at_utc()));
                        self.vibes_by_post = posts
                            .iter()
                            .map(|post| (post.id, post_vibe(post)))
                            .collect();
                        self.posts = posts;
                        self.posts_error = None;
                    }
                    Err(e) => {
                        self.posts_error = Some(match e {
                            ApiError::Unreachable { .. } => {
                                "Unable to reach the server. Please try again.".to_string()
                            }
                            _ => "Failed to load posts.".to_string(),
                        });
                        tracing::error!("loading posts failed: {e}");
                    }
                }
            }
            AppEvent::PostCreated(result) => {
                self.is_creating_post = false;
                match result {
                    Ok(post) => {
                        self.vibes_by_post.insert(post.id, post_vibe(&post));
                        self.posts.insert(0, post);
                        self.new_post_title.clear();
                        self.new_post_content.clear();
                    }
                    Err(e) => {
                        self.status_banner =
                            Some("Failed to create post. Please try again.".to_string());
                        tracing::error!("creating post failed: {e}");
                    }
                }
            }
            AppEvent::CommentCreated { post_id, result } => match result {
                Ok(comment) => {
                    if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                        post.comments.push(comment);
                        self.vibes_by_post.insert(post_id, post_vibe(post));
                    }
                    self.new_comment_inputs.remove(&post_id);
                }
                Err(e) => {
                    self.status_banner =
                        Some("Failed to add comment. Please try again.".to_string());
                    tracing::error!("adding comment failed: {e}");
                }
            },
            AppEvent::PostLiked { post_id, result } => match result {
                Ok(()) => {
                    if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                        post.likes_count += 1;
                    }
                    self.liked_posts.insert(post_id);
                }
                Err(ApiError::Api { status: 400, detail }) => {
                    self.status_banner = Some(if detail.is_empty() {
                        "You have already liked this post".to_string()
                    } else {
                        detail
                    });
                }
                Err(e) => {
                    self.status_banner = Some("Failed to like post. Please try again.".to_string());
                    tracing::error!("liking post failed: {e}");
                }
            },
            AppEvent::PostModerated { new_status, result } => match result {
                Ok(()) => {
                    self.status_banner = Some(format!(
                        "Post marked as {}",
                        if new_status { "misleading" } else { "accurate" }
                    ));
                    self.load_posts();
                }
                Err(e) => {
                    self.status_banner =
                        Some("Failed to moderate post. Please try again.".to_string());
                    tracing::error!("moderating post failed: {e}");
                }
            },
        }
    }

    /// Login or register+login, depending on the form mode.
    pub fn handle_submit(&mut self) {
        if self.username_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Please enter both username and password".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let api = self.auth_api.clone();
        let username = self.username_input.clone();
        let password = self.password_input.clone();
        let role = self.selected_role;
        let registering = self.is_register_mode;
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let result: Result<(String, String), ApiError> = async {
                if registering {
                    api.register_user(&UserCreate {
                        username: username.clone(),
                        password: password.clone(),
                        role: Some(role),
                    })
                    .await?;
                }
                let token = api.request_token(&username, &password).await?;
                Ok((token.access_token, username))
            }
            .await;
            let _ = tx.send(AppEvent::AuthFinished { result, registering });
        });
    }

    pub fn load_posts(&mut self) {
        self.posts_error = None;
        self.posts_loading = true;

        let api = self.post_api.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(AppEvent::PostsLoaded(api.get_posts().await));
        });
    }

    pub fn create_post(&mut self) {
        let title = self.new_post_title.trim().to_string();
        let content = self.new_post_content.trim().to_string();
        if title.is_empty() || content.is_empty() {
            return;
        }
        let Some(token) = self.manager.token() else {
            return;
        };

        self.is_creating_post = true;
        let api = self.post_api.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.create_post(&token, &PostCreate { title, content }).await;
            let _ = tx.send(AppEvent::PostCreated(result));
        });
    }

    pub fn add_comment(&mut self, post_id: i64) {
        let content = self
            .new_comment_inputs
            .get(&post_id)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();
        if content.is_empty() {
            return;
        }
        let Some(token) = self.manager.token() else {
            return;
        };

        let api = self.post_api.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api
                .create_comment(&token, post_id, &CommentCreate { content })
                .await;
            let _ = tx.send(AppEvent::CommentCreated { post_id, result });
        });
    }

    pub fn like_post(&mut self, post_id: i64) {
        if self.liked_posts.contains(&post_id) {
            return;
        }
        let Some(token) = self.manager.token() else {
            return;
        };

        let api = self.post_api.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.like_post(&token, post_id).await;
            let _ = tx.send(AppEvent::PostLiked { post_id, result });
        });
    }

    pub fn toggle_misleading(&mut self, post_id: i64) {
        if !self.manager.is_moderator() {
            return;
        }
        let Some(post) = self.posts.iter().find(|p| p.id == post_id) else {
            return;
        };
        let Some(token) = self.manager.token() else {
            return;
        };

        let new_status = !post.is_misleading;
        let api = self.post_api.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.moderate_post(&token, post_id, new_status).await;
            let _ = tx.send(AppEvent::PostModerated { new_status, result });
        });
    }

    pub fn has_liked(&self, post_id: i64) -> bool {
        self.liked_posts.contains(&post_id)
    }

    pub fn toggle_comments(&mut self, post_id: i64) {
        if !self.expanded_comments.remove(&post_id) {
            self.expanded_comments.insert(post_id);
        }
    }

    pub fn is_comments_expanded(&self, post_id: i64) -> bool {
        self.expanded_comments.contains(&post_id)
    }

    /// Vibe for a post, with the neutral fallback the feed shows before
    /// anything is computed.
    pub fn vibe(&self, post_id: i64) -> Vibe {
        self.vibes_by_post
            .get(&post_id)
            .cloned()
            .unwrap_or_else(Vibe::neutral)
    }

    pub fn logout(&mut self) {
        self.runtime.block_on(self.manager.logout());
        self.posts.clear();
        self.vibes_by_post.clear();
        self.liked_posts.clear();
        self.expanded_comments.clear();
        self.new_comment_inputs.clear();
        self.username_input.clear();
        self.password_input.clear();
        self.status_banner = None;
        self.posts_error = None;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_error = None;
        self.password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn post_vibe(post: &Post) -> Vibe {
    match (&post.vibe_label, &post.vibe_emoji) {
        // the backend's own labels win; the local heuristic is a fallback
        (Some(label), Some(emoji)) => Vibe::new(label.clone(), emoji.clone()),
        _ => vibe_for_comments(&post.comments),
    }
}

fn auth_error_message(error: &ApiError, registering: bool) -> String {
    if let Some(detail) = error.detail() {
        return detail.to_string();
    }
    match error {
        ApiError::Unauthorized => "Invalid username or password".to_string(),
        ApiError::Unreachable { .. } => "Unable to reach the server. Please try again.".to_string(),
        _ if registering => "Registration failed. Please try again.".to_string(),
        _ => "Login failed. Please try again.".to_string(),
    }
}
