//! API routes module

pub mod health;
pub mod products;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Creates the API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready`, with state applied so it can be merged into the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
