//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use validator::Validate;

use auth_service_lib::TokenResponse;
use common::{AppError, AppResult};
use domain::AuthenticateCommand;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User email address
    #[validate(length(min = 1, max = 256, message = "Email is required"))]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login and get JWT token
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .authenticate(
            AuthenticateCommand::new(payload.email, payload.password),
            &state.deadline(),
        )
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(token))
}
