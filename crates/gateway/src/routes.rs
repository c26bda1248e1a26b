//! Route configuration.

use axum::Router;

use crate::handlers::{auth_routes, health_routes, user_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Login (no auth)
        .nest("/auth", auth_routes())
        // Registration is public, profile routes require a bearer token
        .nest("/users", user_routes(state.clone()))
        .with_state(state)
}
