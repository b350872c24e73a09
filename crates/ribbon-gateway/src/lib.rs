//! Ribbon gateway library entry.
//!
//! This crate wires config, the access gate, document storage, and the
//! built-in handlers into a single axum router. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod gate;
pub mod ops;
pub mod router;
pub mod services;
pub mod store;
