//! Unauthenticated liveness endpoints.
//!
//! - `/`        : banner, kept for browsers and uptime pingers
//! - `/healthz` : plain liveness for orchestrators

use axum::{http::StatusCode, response::IntoResponse};

pub const ALIVE_BANNER: &str = "Ribbon Field Core is alive.";

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, ALIVE_BANNER)
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
