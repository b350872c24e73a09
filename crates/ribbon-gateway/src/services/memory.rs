//! `/memory/*` handlers: save, load, list.
//!
//! Storage failures are logged here, with the operation and key, and leave
//! the process as a bare `internal_error`.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use ribbon_core::error::{ClientCode, RibbonError};
use ribbon_core::DocumentKey;

use crate::app_state::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SaveReq {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResp {
    status: &'static str,
    key: DocumentKey,
    saved_at: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadQuery {
    #[serde(default)]
    key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoadResp {
    key: DocumentKey,
    data: Value,
}

#[derive(Debug, Serialize)]
pub struct ListResp {
    keys: Vec<DocumentKey>,
}

fn require_key(raw: Option<String>) -> Result<DocumentKey, RibbonError> {
    let raw = raw.ok_or_else(|| RibbonError::BadRequest("missing key".into()))?;
    DocumentKey::parse(raw)
}

fn storage_failure(op: &'static str, key: Option<&DocumentKey>, e: RibbonError) -> ApiError {
    if e.client_code() == ClientCode::Internal {
        tracing::error!(op, key = ?key.map(DocumentKey::as_str), error = %e, "storage operation failed");
    }
    ApiError(e)
}

pub async fn save(
    State(state): State<AppState>,
    body: Result<Json<SaveReq>, JsonRejection>,
) -> Result<Json<SaveResp>, ApiError> {
    let Json(req) =
        body.map_err(|e| RibbonError::BadRequest(format!("invalid save body: {}", e.body_text())))?;
    let key = require_key(req.key)?;

    let receipt = state
        .store()
        .save(&key, &req.data)
        .await
        .map_err(|e| storage_failure("save", Some(&key), e))?;

    tracing::debug!(key = %receipt.key, "document saved");

    Ok(Json(SaveResp {
        status: "ok",
        saved_at: receipt.saved_at_iso(),
        key: receipt.key,
    }))
}

pub async fn load(
    State(state): State<AppState>,
    query: Result<Query<LoadQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<LoadResp>, ApiError> {
    let Query(q) =
        query.map_err(|e| RibbonError::BadRequest(format!("invalid query: {}", e.body_text())))?;
    let key = require_key(q.key)?;

    let data = state
        .store()
        .load(&key)
        .await
        .map_err(|e| storage_failure("load", Some(&key), e))?;

    Ok(Json(LoadResp { key, data }))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<ListResp>, ApiError> {
    let keys = state
        .store()
        .list()
        .await
        .map_err(|e| storage_failure("list", None, e))?;

    Ok(Json(ListResp { keys }))
}
