//! Ribbon core: runtime-free primitives shared by the gateway and its tests.
//!
//! This crate defines the error surface (stable client codes) and the
//! validated document key. It intentionally carries no transport or runtime
//! dependencies so the same contracts can back any storage or HTTP layer.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RibbonError`/`Result` so a malformed
//! request can never bring the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod document;
pub mod error;

/// Shared result type.
pub use error::{ClientCode, Result, RibbonError};

pub use document::{DocumentKey, DOCUMENT_SUFFIX};
