//! Shared-secret verifier.
//!
//! Fails closed: with no server secret configured every request is rejected
//! as `server_misconfigured`, whatever the caller sends.

use axum::extract::Query;
use subtle::ConstantTimeEq;

use ribbon_core::error::{Result, RibbonError};

use crate::config::AuthSection;

use super::guard::{Guard, RequestView};

#[derive(Debug, Clone)]
pub struct SecretVerifier {
    secret: Option<String>,
    header: String,
    query_param: String,
}

impl SecretVerifier {
    pub fn new(
        secret: Option<String>,
        header: impl Into<String>,
        query_param: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            header: header.into(),
            query_param: query_param.into(),
        }
    }

    pub fn from_config(auth: &AuthSection) -> Self {
        Self::new(
            auth.effective_secret().map(str::to_string),
            auth.header.clone(),
            auth.query_param.clone(),
        )
    }

    pub fn configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Header first; the query parameter is only consulted when the header is
    /// absent or empty. A header that is not valid UTF-8 yields no secret, and
    /// so does a query parameter given more than once.
    fn supplied(&self, req: &RequestView<'_>) -> Option<String> {
        if let Some(v) = req.headers.get(self.header.as_str()) {
            if !v.is_empty() {
                return v.to_str().ok().map(str::to_string);
            }
        }

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri).ok()?;
        let mut matches = pairs
            .into_iter()
            .filter(|(name, _)| *name == self.query_param)
            .map(|(_, value)| value);
        match (matches.next(), matches.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }
}

impl Guard for SecretVerifier {
    fn name(&self) -> &'static str {
        "secret"
    }

    fn check(&self, req: &RequestView<'_>) -> Result<()> {
        let Some(expected) = self.secret.as_deref() else {
            return Err(RibbonError::ServerMisconfigured);
        };

        match self.supplied(req) {
            Some(got) if bool::from(got.as_bytes().ct_eq(expected.as_bytes())) => Ok(()),
            _ => Err(RibbonError::Unauthorized),
        }
    }
}
