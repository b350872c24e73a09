//! Axum router wiring.
//!
//! Liveness routes are open; everything else sits behind the access gate
//! layer, which answers denials itself so handlers never see them.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, gate, ops, services};

pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/core", post(services::echo::echo))
        .route("/api/tsumugi", post(services::echo::echo))
        .route("/memory/save", post(services::memory::save))
        .route("/memory/load", get(services::memory::load))
        .route("/memory/list", get(services::memory::list))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            gate::middleware::access_gate,
        ));

    Router::new()
        .route("/", get(ops::root))
        .route("/healthz", get(ops::healthz))
        .merge(gated)
        .with_state(state)
}
