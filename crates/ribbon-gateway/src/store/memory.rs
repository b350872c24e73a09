use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use ribbon_core::error::{Result, RibbonError};
use ribbon_core::DocumentKey;

use super::{DocumentStore, SaveReceipt};

/// Non-persistent backend (`storage.backend: memory`).
#[derive(Default)]
pub struct MemoryStore {
    docs: DashMap<DocumentKey, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn save(&self, key: &DocumentKey, value: &Value) -> Result<SaveReceipt> {
        self.docs.insert(key.clone(), value.clone());
        Ok(SaveReceipt::now(key.clone()))
    }

    async fn load(&self, key: &DocumentKey) -> Result<Value> {
        self.docs
            .get(key)
            .map(|e| e.value().clone())
            .ok_or_else(|| RibbonError::NotFound(key.to_string()))
    }

    async fn list(&self) -> Result<Vec<DocumentKey>> {
        Ok(self.docs.iter().map(|e| e.key().clone()).collect())
    }
}
