// src/routes/mod.rs
pub mod chat;
pub mod profile;
pub mod weather;

use crate::{message::StatusResponse, state::SharedState};
use axum::{
    Json, Router,
    routing::{get, post},
};
use chat::chat_handler;
use profile::update_profile_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use weather::weather_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .route("/api/weather", get(weather_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/user/update-profile", post(update_profile_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "MMuni API".to_string(),
        status: "ok".to_string(),
    })
}
