use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::AppState;
use crate::error::ErrorBody;
use crate::routes::ping::PingResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ping API",
        version = "2.0.0",
        description = "Current time in the caller's timezone plus a per-user visit counter."
    ),
    paths(crate::routes::ping::ping),
    components(schemas(PingResponse, ErrorBody)),
    tags((name = "ping", description = "Time and visit tracking"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
