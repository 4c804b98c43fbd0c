//! Journal entry routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::auth::AuthUser;
use crate::services::band_event::{self, BandEventRow, NewBandEvent};
use crate::state::AppState;

/// `GET /api/events`: the caller's entries, newest first.
pub async fn list_events(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<BandEventRow>>, StatusCode> {
    band_event::list_events(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %auth.user.id, "list events failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// `POST /api/events`: validate and store a new entry.
pub async fn create_event(State(state): State<AppState>, auth: AuthUser, Json(body): Json<NewBandEvent>) -> Response {
    let valid = match body.validate() {
        Ok(v) => v,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match band_event::create_event(&state.pool, auth.user.id, &valid).await {
        Ok(row) => {
            tracing::info!(event_id = %row.id, user_id = %auth.user.id, "event created");
            (StatusCode::CREATED, Json(row)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "create event failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to create event").into_response()
        }
    }
}
