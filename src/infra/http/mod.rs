pub mod error;
pub mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use sqlx::Error as SqlxError;

use crate::application::cafes::CafeService;
use crate::application::error::ErrorReport;
use crate::infra::db::SqliteRepositories;

use self::middleware::{log_failures, set_request_context};

#[derive(Clone)]
pub struct ApiState {
    pub cafes: Arc<CafeService>,
    pub db: Arc<SqliteRepositories>,
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/random", get(handlers::random_cafe))
        .route("/all", get(handlers::all_cafes))
        .route("/search", get(handlers::search_cafes))
        .route("/add", post(handlers::add_cafe))
        .route("/update-price/{id}", patch(handlers::update_price))
        .route("/_health/db", get(handlers::db_health))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_failures))
        .layer(axum_middleware::from_fn(set_request_context))
}

fn db_health_response(result: Result<(), SqlxError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let mut response = StatusCode::SERVICE_UNAVAILABLE.into_response();
            ErrorReport::from_error(
                "infra::http::db_health",
                StatusCode::SERVICE_UNAVAILABLE,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}
