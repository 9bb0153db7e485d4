use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{
    message::{ErrorBody, WeatherQuery},
    services::weather::fetch_weather,
    state::SharedState,
};

pub async fn weather_handler(
    State(state): State<SharedState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected weather query: {rejection}");
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    match fetch_weather(&state.http, &state.config, query).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(
                lat = query.lat,
                lng = query.lng,
                status = ?e.status(),
                "Weather API error: {e}"
            );
            Json(ErrorBody::from(e)).into_response()
        }
    }
}
