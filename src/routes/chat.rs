use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{
    message::{ChatRequest, ErrorBody},
    services::chat::relay_chat,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected chat request: {rejection}");
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    match relay_chat(&state.http, &state.config, &payload).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(user = payload.user(), status = ?e.status(), "Chat API error: {e}");
            Json(ErrorBody::from(e)).into_response()
        }
    }
}
