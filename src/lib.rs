pub mod config;
pub mod db;
pub mod error;
pub mod headers;
pub mod models;
pub mod routes;
pub mod store;
pub mod timezone;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::store::VisitStore;

#[derive(Clone)]
pub struct AppState {
    pub store: VisitStore,
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router.
///
/// Caller is responsible for creating the schema on the store's pool
/// beforehand (see [`db::init_pool`] / [`db::init_schema`]).
pub fn build_app(store: VisitStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .merge(routes::ping::router())
        .merge(routes::docs::router())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
