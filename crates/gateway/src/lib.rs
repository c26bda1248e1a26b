//! API Gateway Library
//!
//! HTTP boundary of the users service: decodes requests into commands,
//! invokes the workflows and maps results to responses.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use auth_service_lib::build_authenticator;
use user_service_lib::infra::Database;
use user_service_lib::{UserManager, UserRepository, UserStore};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database, wire the services and serve HTTP until shutdown.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (runs pending migrations)
    let db = Database::connect(&config.database).await?;
    let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));

    // Create services
    let auth_service = Arc::new(build_authenticator(Arc::clone(&repo), &config.jwt).await?);
    let user_service = Arc::new(UserManager::new(repo));

    // Create app state
    let state = AppState::new(auth_service, user_service, config.server.request_timeout);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.server.addr().parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
