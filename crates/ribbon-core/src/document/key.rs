//! Validated document key.
//!
//! Keys are caller-chosen and used verbatim as file stems, so anything that
//! could escape the storage root is rejected here rather than escaped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};

/// Upper bound on key length, in bytes. Leaves room for the suffix and a
/// staging prefix under the common 255-byte file name limit.
pub const MAX_KEY_BYTES: usize = 200;

/// A key that is safe to use as a single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Validate a raw caller-supplied key.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(RibbonError::BadRequest("key must not be empty".into()));
        }
        if raw.len() > MAX_KEY_BYTES {
            return Err(RibbonError::BadRequest(format!(
                "key must be at most {MAX_KEY_BYTES} bytes"
            )));
        }
        if raw == "." || raw == ".." {
            return Err(RibbonError::BadRequest(
                "key must not be a directory reference".into(),
            ));
        }
        if let Some(c) = raw
            .chars()
            .find(|c| matches!(c, '/' | '\\') || c.is_control())
        {
            return Err(RibbonError::BadRequest(format!(
                "key contains forbidden character {c:?}"
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name this key maps to inside a storage root.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0, super::DOCUMENT_SUFFIX)
    }

    /// Inverse of [`file_name`](Self::file_name). Returns `None` for entries
    /// that are not documents (wrong suffix, or a stem that would not parse).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(super::DOCUMENT_SUFFIX)?;
        Self::parse(stem).ok()
    }
}

impl TryFrom<String> for DocumentKey {
    type Error = RibbonError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.0
    }
}

impl AsRef<str> for DocumentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
