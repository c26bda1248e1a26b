//! User handlers.

use axum::{
    extract::{Extension, State},
    http::{header::LOCATION, StatusCode},
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{RegisterCommand, UserResponse};

use crate::extractors::ValidatedJson;
use crate::middleware::{auth_middleware, CurrentUser};
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// User email address
    #[validate(length(min = 1, max = 256, message = "Email must be 1-256 characters"))]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// User display name
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,
}

/// Registration result
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: Uuid,
}

/// Profile update request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,
}

/// Create user routes
pub fn user_routes(state: AppState) -> Router<AppState> {
    let profile = Router::new()
        .route("/me", get(get_current_user).put(update_current_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/", post(register)).merge(profile)
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<RegisterResponse>)> {
    let id = state
        .auth_service
        .register(
            RegisterCommand::new(payload.email, payload.password, payload.name),
            &state.deadline(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/users/{}", id))],
        Json(RegisterResponse { id }),
    ))
}

/// Get current authenticated user
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user(current_user.id, &state.deadline())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Update the current user's display name
pub async fn update_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_profile(current_user.id, payload.name, &state.deadline())
        .await?;

    Ok(Json(UserResponse::from(user)))
}
