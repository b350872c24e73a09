//! Origin filter: exact-match allow-list over the caller's address.
//!
//! The effective address is the first `x-forwarded-for` entry whenever that
//! header is present, otherwise the transport peer. Matching is plain string
//! equality; there is no prefix or CIDR support.

use std::collections::HashSet;

use ribbon_core::error::{Result, RibbonError};

use super::guard::{Guard, RequestView};

pub const FORWARDED_FOR: &str = "x-forwarded-for";

#[derive(Debug, Clone, Default)]
pub struct OriginFilter {
    allowed: HashSet<String>,
}

impl OriginFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Empty allow-list means the filter admits everything.
    pub fn enabled(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Address the allow-list is checked against.
    ///
    /// A present `x-forwarded-for` always decides, even when its first entry
    /// is empty; a value that is not UTF-8 yields `None`. The peer is only
    /// used when the header is absent.
    pub fn effective_origin(req: &RequestView<'_>) -> Option<String> {
        match req.headers.get(FORWARDED_FOR) {
            Some(v) => v
                .to_str()
                .ok()
                .and_then(|s| s.split(',').next())
                .map(|first| first.trim().to_string()),
            None => req.peer.map(|ip| ip.to_string()),
        }
    }
}

impl Guard for OriginFilter {
    fn name(&self) -> &'static str {
        "origin"
    }

    fn check(&self, req: &RequestView<'_>) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }

        match Self::effective_origin(req) {
            Some(origin) if self.allowed.contains(&origin) => Ok(()),
            other => {
                tracing::debug!(origin = ?other, "origin not in allow-list");
                Err(RibbonError::ForbiddenOrigin)
            }
        }
    }
}
