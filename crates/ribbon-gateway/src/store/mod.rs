//! Document storage.
//!
//! Handlers only see the [`DocumentStore`] trait, so the flat-file layout can
//! be replaced by another backend without touching the HTTP layer.
//!
//! - [`fs::FileStore`]: one pretty-printed `<key>.json` per document under a
//!   single root directory. Survives restarts.
//! - [`memory::MemoryStore`]: process-local map. Same contract minus
//!   persistence.
//!
//! Keys reaching a backend are already validated ([`DocumentKey`]), so a key
//! can always be used as a single path component.

pub mod fs;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use ribbon_core::{DocumentKey, Result};

use crate::config::{StorageBackend, StorageSection};

pub use fs::FileStore;
pub use memory::MemoryStore;

/// Confirmation returned by a successful save.
#[derive(Debug, Clone)]
pub struct SaveReceipt {
    pub key: DocumentKey,
    pub saved_at: DateTime<Utc>,
}

impl SaveReceipt {
    pub fn now(key: DocumentKey) -> Self {
        Self {
            key,
            saved_at: Utc::now(),
        }
    }

    /// ISO 8601, UTC, millisecond precision (`2026-10-16T09:30:00.123Z`).
    pub fn saved_at_iso(&self) -> String {
        self.saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Key -> JSON document mapping. Last write wins; there is no delete.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Create or overwrite the document under `key`.
    async fn save(&self, key: &DocumentKey, value: &Value) -> Result<SaveReceipt>;

    /// `RibbonError::NotFound` when nothing is stored under `key`.
    async fn load(&self, key: &DocumentKey) -> Result<Value>;

    /// All stored keys, in backend order (callers must not rely on it).
    async fn list(&self) -> Result<Vec<DocumentKey>>;
}

/// Build the backend selected by config.
pub fn from_config(storage: &StorageSection) -> Arc<dyn DocumentStore> {
    match storage.backend {
        StorageBackend::File => Arc::new(FileStore::new(storage.root())),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    }
}
