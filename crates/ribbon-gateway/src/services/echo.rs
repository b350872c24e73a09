use axum::{extract::rejection::JsonRejection, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use ribbon_core::error::RibbonError;

use crate::error::ApiError;

pub const ECHO_MESSAGE: &str = "Ribbon Field Core received your thought.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResp {
    ok: bool,
    message: &'static str,
    received_at: String,
    payload: Value,
}

/// Echo an arbitrary JSON payload with a receipt timestamp. A request without
/// a JSON content type is treated as an empty object.
pub async fn echo(body: Result<Json<Value>, JsonRejection>) -> Result<Json<EchoResp>, ApiError> {
    let payload = match body {
        Ok(Json(v)) => v,
        Err(JsonRejection::MissingJsonContentType(_)) => json!({}),
        Err(e) => {
            return Err(RibbonError::BadRequest(format!("invalid payload: {}", e.body_text())).into());
        }
    };

    Ok(Json(EchoResp {
        ok: true,
        message: ECHO_MESSAGE,
        received_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        payload,
    }))
}
