// src/services/chat.rs
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::RelayConfig,
    error::AppError,
    message::{ChatPayload, ChatRequest},
    services::upstream::send_json,
};

pub async fn relay_chat(
    http: &Client,
    config: &RelayConfig,
    req: &ChatRequest,
) -> Result<Value, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::BadRequest("Query cannot be empty".to_string()));
    }

    let request = http
        .post(config.chat_url())
        .bearer_auth(&config.ai_api_key)
        .json(&ChatPayload::from(req))
        .timeout(config.chat_timeout);

    send_json(request).await
}
