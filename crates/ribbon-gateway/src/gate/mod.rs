//! Access gate (origin filter + secret verifier).
//!
//! Compiles the auth/origin configuration into an ordered guard pipeline
//! that the router installs in front of every gated route. Guards are pure
//! in-memory checks and never block.

pub mod guard;
pub mod middleware;
pub mod origin;
pub mod secret;

pub use guard::{AccessGate, Guard, RequestView};
pub use origin::OriginFilter;
pub use secret::SecretVerifier;
