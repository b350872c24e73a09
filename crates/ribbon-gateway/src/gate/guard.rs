use std::net::IpAddr;
use std::sync::Arc;

use axum::http::{HeaderMap, Uri};

use ribbon_core::error::Result;

use crate::config::GatewayConfig;

use super::{OriginFilter, SecretVerifier};

/// The parts of an inbound request guards are allowed to look at.
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    pub headers: &'a HeaderMap,
    pub uri: &'a Uri,
    /// Transport-level peer address, when the listener provides one.
    pub peer: Option<IpAddr>,
}

/// A single admission check. `Ok(())` admits; any error terminates the request.
pub trait Guard: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, req: &RequestView<'_>) -> Result<()>;
}

/// Ordered guard pipeline. The first guard to deny wins; later guards never run.
#[derive(Default, Clone)]
pub struct AccessGate {
    guards: Vec<Arc<dyn Guard>>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Origin filter first, then secret verifier.
    pub fn from_config(cfg: &GatewayConfig) -> Self {
        let secret = SecretVerifier::from_config(&cfg.auth);
        if !secret.configured() {
            tracing::warn!("no server secret configured; gated routes will answer server_misconfigured");
        }

        Self::new()
            .with_guard(Arc::new(OriginFilter::new(cfg.origin.allowed.clone())))
            .with_guard(Arc::new(secret))
    }

    pub fn with_guard(mut self, guard: Arc<dyn Guard>) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn guard_names(&self) -> Vec<&'static str> {
        self.guards.iter().map(|g| g.name()).collect()
    }

    pub fn admit(&self, req: &RequestView<'_>) -> Result<()> {
        for g in &self.guards {
            g.check(req)?;
        }
        Ok(())
    }
}
