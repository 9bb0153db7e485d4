use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{
    message::{ProfileResponse, UserProfileUpdate},
    services::profile::upsert_profile,
    state::SharedState,
};

/// Writes with the store's service key, so it works for freshly registered
/// users that have no session yet.
pub async fn update_profile_handler(
    State(state): State<SharedState>,
    payload: Result<Json<UserProfileUpdate>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected profile update: {rejection}");
            let body = ProfileResponse::failed_with(rejection.body_text());
            return (rejection.status(), Json(body)).into_response();
        }
    };

    match upsert_profile(&state.http, &state.config, &payload).await {
        Ok(row) => Json(ProfileResponse::ok(row)).into_response(),
        Err(e) => {
            error!(
                user_id = %payload.user_id,
                status = ?e.status(),
                "User profile update failed: {e}"
            );
            Json(ProfileResponse::failed(e)).into_response()
        }
    }
}
