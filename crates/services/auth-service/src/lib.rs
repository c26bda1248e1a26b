//! Auth Service Library
//!
//! Registration and authentication workflows, password hashing and token
//! issuance. Persistence is reached through `user_service_lib::UserRepository`.

pub mod password;
pub mod service;
pub mod token;

use std::sync::Arc;

use common::{AppError, AppResult, JwtConfig};
use user_service_lib::UserRepository;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, AuthenticateUser, Authenticator, RegisterUser, TokenResponse};
pub use token::{Claims, JwtIssuer, TokenIssuer};

/// Wire the production authenticator: Argon2id hashing and HS256 tokens.
///
/// Building it hashes the dummy password, so that runs on the blocking pool.
pub async fn build_authenticator(
    repo: Arc<dyn UserRepository>,
    config: &JwtConfig,
) -> AppResult<Authenticator> {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
    let issuer = Arc::new(JwtIssuer::new(config));

    tokio::task::spawn_blocking(move || Authenticator::new(repo, hasher, issuer))
        .await
        .map_err(|e| AppError::internal(format!("Authenticator setup failed: {}", e)))?
}
