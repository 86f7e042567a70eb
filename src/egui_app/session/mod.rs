//! Session authentication lifecycle
//!
//! Everything involved in acquiring, validating, persisting, and
//! invalidating a login session without asking the server twice:
//!
//! - **`claims`** - fail-soft decoding of the token's claims segment
//! - **`store`** - durable two-slot persistence (token + serialized user)
//! - **`validity`** - "does this token still grant access" against the
//!   wall clock
//! - **`manager`** - the state machine tying it together, with a
//!   replay-last-value broadcast for observers
//!
//! The manager is the sole writer of both the in-memory pair and the
//! store; every other component reads a snapshot or subscribes.

pub mod claims;
pub mod manager;
pub mod store;
pub mod validity;

pub use claims::Claims;
pub use manager::{SessionCause, SessionManager, SessionNotice, SessionState};
pub use store::{
    default_store, MemorySessionStore, NullSessionStore, SessionStore, SqliteSessionStore,
    CURRENT_USER_KEY, TOKEN_KEY,
};
pub use validity::{is_token_valid, is_token_valid_at};
