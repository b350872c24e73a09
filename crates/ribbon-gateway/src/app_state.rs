//! Shared application state for the ribbon gateway.
//!
//! Built once at startup from the validated config and cloned into every
//! handler. Only the compiled gate and the store are kept; nothing in here
//! is mutated after construction, and the document store does its own
//! synchronization.

use std::sync::Arc;

use ribbon_core::error::Result;

use crate::config::GatewayConfig;
use crate::gate::AccessGate;
use crate::store::{self, DocumentStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn DocumentStore>,
}

struct AppStateInner {
    gate: AccessGate,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        let gate = AccessGate::from_config(&cfg);
        let store = store::from_config(&cfg.storage);

        Ok(Self::with_parts(gate, store))
    }

    /// Assemble state from pre-built parts (custom guards or backends).
    pub fn with_parts(gate: AccessGate, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { gate }),
            store,
        }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.inner.gate
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.store)
    }
}
