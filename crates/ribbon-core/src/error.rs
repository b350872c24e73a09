//! Shared error type across ribbon crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Caller address is not on the allow-list.
    ForbiddenOrigin,
    /// Secret missing or wrong.
    Unauthorized,
    /// No server secret configured; gated routes fail closed.
    ServerMisconfigured,
    /// Invalid input / missing field.
    BadRequest,
    /// No document stored under the key.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ForbiddenOrigin => "forbidden_origin",
            ClientCode::Unauthorized => "unauthorized",
            ClientCode::ServerMisconfigured => "server_misconfigured",
            ClientCode::BadRequest => "bad_request",
            ClientCode::NotFound => "not_found",
            ClientCode::Internal => "internal_error",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RibbonError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error("forbidden origin")]
    ForbiddenOrigin,
    #[error("unauthorized")]
    Unauthorized,
    #[error("server secret not configured")]
    ServerMisconfigured,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config: {0}")]
    Config(String),
}

impl RibbonError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RibbonError::ForbiddenOrigin => ClientCode::ForbiddenOrigin,
            RibbonError::Unauthorized => ClientCode::Unauthorized,
            RibbonError::ServerMisconfigured => ClientCode::ServerMisconfigured,
            RibbonError::BadRequest(_) => ClientCode::BadRequest,
            RibbonError::NotFound(_) => ClientCode::NotFound,
            RibbonError::Io(_) | RibbonError::Json(_) | RibbonError::Config(_) => {
                ClientCode::Internal
            }
        }
    }

    /// Detail that may be shown to the caller. Only input errors qualify;
    /// everything else stays in the logs.
    pub fn client_message(&self) -> Option<&str> {
        match self {
            RibbonError::BadRequest(msg) => Some(msg),
            _ => None,
        }
    }
}
