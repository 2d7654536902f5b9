//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the application router with state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(metrics::router())
        .merge(search::router(state.clone()))
        .with_state(state)
}
