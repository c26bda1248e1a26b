//! Authentication service - facade over the register and authenticate workflows.
//!
//! SOLID (SRP): Handles authentication concerns only.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, Deadline};
use domain::{AuthenticateCommand, RegisterCommand, TOKEN_LIFETIME_SECONDS, TOKEN_TYPE_BEARER};
use user_service_lib::UserRepository;

use super::{AuthenticateUser, RegisterUser};
use crate::password::PasswordHasher;
use crate::token::{Claims, JwtIssuer};

/// Token response returned after successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiration time in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: TOKEN_LIFETIME_SECONDS,
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return its identifier
    async fn register(&self, command: RegisterCommand, deadline: &Deadline) -> AppResult<Uuid>;

    /// Authenticate; `None` means the credentials were rejected
    async fn authenticate(
        &self,
        command: AuthenticateCommand,
        deadline: &Deadline,
    ) -> AppResult<Option<TokenResponse>>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    register: RegisterUser,
    authenticate: AuthenticateUser,
    issuer: Arc<JwtIssuer>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<JwtIssuer>,
    ) -> AppResult<Self> {
        Ok(Self {
            register: RegisterUser::new(Arc::clone(&repo), Arc::clone(&hasher)),
            authenticate: AuthenticateUser::new(repo, hasher, issuer.clone())?,
            issuer,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, command: RegisterCommand, deadline: &Deadline) -> AppResult<Uuid> {
        self.register.execute(command, deadline).await
    }

    async fn authenticate(
        &self,
        command: AuthenticateCommand,
        deadline: &Deadline,
    ) -> AppResult<Option<TokenResponse>> {
        Ok(self
            .authenticate
            .execute(command, deadline)
            .await?
            .map(TokenResponse::bearer))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.issuer.verify(token)
    }
}
