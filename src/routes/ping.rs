use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::error::{AppError, ErrorBody};
use crate::headers::PingHeaders;
use crate::timezone::format_instant;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    /// `Pong @ <current time in the requested zone>`.
    pub message: String,
    /// Visits recorded for this user, including this one.
    pub views: i64,
    /// Time of the latest visit, in the requested zone.
    pub updated_at: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

/// Health check with timestamp and view tracking.
///
/// Returns "Pong" with the current datetime in the caller's timezone and
/// bumps the caller's view count.
#[utoipa::path(
    get,
    path = "/ping",
    tags = ["ping"],
    params(
        ("X-User-Id" = String, Header, description = "Unique user identifier"),
        ("X-Timezone" = Option<String>, Header, description = "IANA timezone (e.g., America/New_York); defaults to UTC"),
    ),
    responses(
        (status = 200, description = "Pong with the updated view count", body = PingResponse),
        (status = 400, description = "Missing user id or unknown timezone", body = ErrorBody),
        (status = 503, description = "Visit store unavailable", body = ErrorBody),
    ),
    operation_id = "ping"
)]
pub async fn ping(
    State(state): State<AppState>,
    PingHeaders { user_id, tz }: PingHeaders,
) -> Result<Json<PingResponse>, AppError> {
    let record = state.store.record_visit(&user_id).await?;

    tracing::debug!(user_id = %record.user_id, views = record.views, "recorded visit");

    Ok(Json(PingResponse {
        message: format!("Pong @ {}", format_instant(Utc::now(), tz)),
        views: record.views,
        updated_at: format_instant(record.updated_at, tz),
    }))
}
