//! HTTP mapping for [`RibbonError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use ribbon_core::error::{ClientCode, RibbonError};

/// Handler-boundary error. Wraps the core error so it can be rendered by axum.
#[derive(Debug)]
pub struct ApiError(pub RibbonError);

impl From<RibbonError> for ApiError {
    fn from(e: RibbonError) -> Self {
        Self(e)
    }
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::ForbiddenOrigin => StatusCode::FORBIDDEN,
        ClientCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::ServerMisconfigured | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let body = match self.0.client_message() {
            Some(msg) => json!({ "error": code.as_str(), "message": msg }),
            None => json!({ "error": code.as_str() }),
        };
        (status_for(code), Json(body)).into_response()
    }
}
