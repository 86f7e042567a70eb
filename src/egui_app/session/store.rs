//! # Session Store
//!
//! Durable key-value slots for the current session, the desktop equivalent
//! of the browser's local storage. Exactly two keys are in use: the raw
//! bearer token and the serialized current user.
//!
//! Storage is best-effort by contract: a read that fails for any reason
//! reports "absent" and a write that fails is dropped (with a warning in
//! the logs). The session manager treats a missing value as "anonymous",
//! so a broken disk degrades the app to logged-out instead of crashing it.
//!
//! Three adapters:
//! - [`SqliteSessionStore`] - the real one, a SQLite file in the platform
//!   data directory
//! - [`MemorySessionStore`] - in-memory fake for tests
//! - [`NullSessionStore`] - selected when no writable data directory
//!   exists (headless/CI environments); reads absent, writes nothing
//!
//! The environment capability check happens once, in [`default_store`],
//! never at individual call sites.

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Store key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";
/// Store key holding the serialized current user
pub const CURRENT_USER_KEY: &str = "current-user";

/// Two string slots scoped to this device, surviving restarts.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a slot; absent on any failure.
    async fn get(&self, key: &str) -> Option<String>;
    /// Write a slot; failures are dropped.
    async fn set(&self, key: &str, value: &str);
    /// Clear a slot.
    async fn remove(&self, key: &str);
    /// Whether writes actually persist. The null adapter reports false and
    /// the session manager then skips persistence entirely.
    fn persistent(&self) -> bool {
        true
    }
}

/// Pick the store for the current environment: SQLite in the platform data
/// directory when one exists, otherwise the null adapter.
pub async fn default_store() -> Box<dyn SessionStore> {
    let Some(mut dir) = dirs::data_dir() else {
        tracing::warn!("no data directory available, session will not persist");
        return Box::new(NullSessionStore);
    };
    dir.push("vibeforum");
    match SqliteSessionStore::open(dir.join("session.db")).await {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("cannot open session store: {e}, session will not persist");
            Box::new(NullSessionStore)
        }
    }
}

/// SQLite-backed store in the platform data directory.
#[derive(Debug)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Open or create the store at `path`, creating parent directories as
    /// needed.
    pub async fn open(path: impl AsRef<Path>) -> sqlx::Result<Self> {
        let path: PathBuf = path.as_ref().to_owned();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous=NORMAL").execute(&pool).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS session_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        let result = sqlx::query_scalar::<_, String>(
            "SELECT value FROM session_store WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("session store read failed for {key}: {e}");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let result = sqlx::query(
            "INSERT INTO session_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            tracing::warn!("session store write failed for {key}: {e}");
        }
    }

    async fn remove(&self, key: &str) {
        let result = sqlx::query("DELETE FROM session_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await;

        if let Err(e) = result {
            tracing::warn!("session store delete failed for {key}: {e}");
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, for rehydration tests.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let map = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// No-op store for environments without durable storage.
#[derive(Debug, Default)]
pub struct NullSessionStore;

#[async_trait]
impl SessionStore for NullSessionStore {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str) {}

    async fn remove(&self, _key: &str) {}

    fn persistent(&self) -> bool {
        false
    }
}
