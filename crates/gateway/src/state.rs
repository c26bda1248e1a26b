//! Application state for dependency injection.

use std::sync::Arc;
use std::time::Duration;

use auth_service_lib::AuthService;
use common::Deadline;
use user_service_lib::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            request_timeout,
        }
    }

    /// Deadline for a request starting now.
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}
