use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/dns-query",
            post(handlers::resolve::post_query).get(handlers::resolve::get_query),
        )
        .route(
            "/dns-query/{provider}",
            post(handlers::resolve::post_query_with_provider)
                .get(handlers::resolve::get_query_with_provider),
        )
        .with_state(state)
}
