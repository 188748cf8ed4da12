use super::{
    handlers::{health, joyas},
    middleware::logging::logging_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalog (read-only)
        .route("/joyas", get(joyas::list_joyas))
        .route("/joyas/joya/{id}", get(joyas::get_joya))
        .route("/joyas/filtros", get(joyas::filter_joyas))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
