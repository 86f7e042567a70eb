//! Vibe Forum - Main Library
//!
//! Vibe Forum is a native desktop client for a forum backend, built with
//! Rust and egui. It authenticates a user against the backend's token
//! endpoint, shows the posts feed, and lets users comment, like, and (as a
//! moderator) flag posts as misleading.
//!
//! # Overview
//!
//! The interesting part of the crate is the client-side session lifecycle:
//! acquiring a bearer token, decoding its claims without contacting the
//! server again, persisting the session across restarts, broadcasting
//! state changes to the UI, and invalidating everything on logout or
//! expiry. That all lives in [`egui_app::session`]; the rest of the crate
//! is the thin HTTP and rendering glue around it.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Platform-agnostic types
//!   - Wire models for users, posts, comments
//!   - Error taxonomy and configuration
//!   - The comment-vibe heuristic
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session lifecycle manager and its storage
//!   - HTTP clients for the auth and post endpoints
//!   - Views, guard, and app state
//!
//! # Session Lifecycle
//!
//! On startup the session manager rehydrates from local storage: a
//! persisted token that is still valid restores the signed-in user without
//! any network traffic; anything stale or malformed is scrubbed and the
//! app starts anonymous. Tokens are treated as opaque three-segment
//! credentials: only the claims segment is read, and never verified
//! locally (the issuing server is trusted).
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - The taxonomy in `shared::error` for everything the backend can do
//!
//! Claims decoding and session storage are deliberately fail-soft: a
//! corrupted token or a broken disk degrades to "anonymous", never to a
//! crash.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
