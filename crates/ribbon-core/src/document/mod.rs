//! Document addressing.
//!
//! A document is any JSON value; the store never looks inside it. What the
//! core does own is the key: every key that reaches a storage backend has
//! already passed [`DocumentKey::parse`], so backends may join it onto a
//! filesystem root without further checks.

pub mod key;

pub use key::{DocumentKey, MAX_KEY_BYTES};

/// Suffix appended to a key to form its on-disk file name.
pub const DOCUMENT_SUFFIX: &str = ".json";
