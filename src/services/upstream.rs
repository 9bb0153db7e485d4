// src/services/upstream.rs
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::error::AppError;

/// Sends one request and decodes the JSON reply.
///
/// Exactly one transport attempt. A non-2xx reply becomes
/// `AppError::Upstream` carrying the body text. An empty 2xx body decodes
/// to `Value::Null`. Transport errors are stripped of their URL on the way
/// through `From<reqwest::Error>`.
pub async fn send_json(request: RequestBuilder) -> Result<Value, AppError> {
    let res = request.send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(AppError::Upstream { status, body });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}
