//! User service - profile operations for authenticated users.
//!
//! SOLID (SRP): Handles profile use cases only. Registration lives with
//! authentication because it owns password hashing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, Deadline, OptionExt};
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid, deadline: &Deadline) -> AppResult<User>;

    /// Change the display name of an existing user
    async fn update_profile(&self, id: Uuid, name: String, deadline: &Deadline)
        -> AppResult<User>;

    /// Check that the backing store is reachable before the deadline
    async fn health(&self, deadline: &Deadline) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid, deadline: &Deadline) -> AppResult<User> {
        deadline
            .run(self.repo.find_by_id(id))
            .await?
            .ok_or_not_found()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: String,
        deadline: &Deadline,
    ) -> AppResult<User> {
        let mut user = deadline
            .run(self.repo.find_by_id(id))
            .await?
            .ok_or_not_found()?;

        user.update_profile(name);
        deadline.run(self.repo.update(&user)).await?;

        tracing::info!(user_id = %id, "Profile updated");
        Ok(user)
    }

    async fn health(&self, deadline: &Deadline) -> AppResult<()> {
        deadline.run(self.repo.ping()).await
    }
}
