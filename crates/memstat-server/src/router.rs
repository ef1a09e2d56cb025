//! Axum router wiring.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Same as [`build_router`], with `extra` routes merged in under the same
/// middleware stack.
pub fn build_router_with(state: AppState, extra: Router<AppState>) -> Router {
    Router::new()
        .route("/update/:type/:name/:value", post(transport::http::update))
        .route("/metrics", get(transport::http::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .merge(extra)
        .layer(middleware::from_fn(transport::recover::catch_panic))
        .with_state(state)
}
