//! Register workflow.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, Deadline};
use domain::{RegisterCommand, User};
use user_service_lib::UserRepository;

use crate::password::{hash_blocking, PasswordHasher};

/// Creates a user: uniqueness check, hash, validate, insert.
pub struct RegisterUser {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUser {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Register a user and return the new identifier.
    ///
    /// A taken email is `AppError::Conflict` whether the pre-check or the
    /// store's unique index catches it. Nothing is retried.
    pub async fn execute(&self, command: RegisterCommand, deadline: &Deadline) -> AppResult<Uuid> {
        let RegisterCommand {
            email,
            password,
            name,
        } = command;

        if deadline.run(self.repo.find_by_email(&email)).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        // Don't start an expensive hash for an abandoned request
        deadline.check()?;
        let password_hash = hash_blocking(&self.hasher, password).await?;

        let user = User::new(email, password_hash, name)?;
        deadline.run(self.repo.insert(&user)).await?;

        info!(user_id = %user.id(), "User registered");
        Ok(user.id())
    }
}
