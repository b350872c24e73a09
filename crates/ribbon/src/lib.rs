//! Top-level facade crate for ribbon.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use ribbon_core::*;
}

pub mod gateway {
    pub use ribbon_gateway::*;
}
