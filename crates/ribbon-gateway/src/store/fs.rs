use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use ribbon_core::error::{Result, RibbonError};
use ribbon_core::DocumentKey;

use super::{DocumentStore, SaveReceipt};

/// Per-process counter keeping concurrent staging files for one key apart.
static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &DocumentKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    // Hidden and `.tmp`-suffixed, so `list` never reports it.
    fn staging_path(&self, key: &DocumentKey) -> PathBuf {
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{}.{}.{}.tmp", key.file_name(), std::process::id(), seq))
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn save(&self, key: &DocumentKey, value: &Value) -> Result<SaveReceipt> {
        self.ensure_root().await?;

        let body = serde_json::to_vec_pretty(value)?;
        let staging = self.staging_path(key);
        fs::write(&staging, &body).await?;

        if let Err(e) = fs::rename(&staging, self.path_for(key)).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }

        Ok(SaveReceipt::now(key.clone()))
    }

    async fn load(&self, key: &DocumentKey) -> Result<Value> {
        let bytes = match fs::read(self.path_for(key)).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RibbonError::NotFound(key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn list(&self) -> Result<Vec<DocumentKey>> {
        self.ensure_root().await?;

        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(key) = name.to_str().and_then(DocumentKey::from_file_name) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
