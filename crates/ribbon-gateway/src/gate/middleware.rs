use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::error::ApiError;

use super::guard::RequestView;

/// Axum middleware running the access gate ahead of every gated route.
pub async fn access_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let verdict = {
        let peer = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        let view = RequestView {
            headers: req.headers(),
            uri: req.uri(),
            peer,
        };
        state.gate().admit(&view)
    };

    if let Err(e) = verdict {
        tracing::warn!(
            path = %req.uri().path(),
            code = e.client_code().as_str(),
            "request denied by access gate"
        );
        return ApiError::from(e).into_response();
    }

    next.run(req).await
}
