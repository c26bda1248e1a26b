//! In-memory repository for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::User;

use super::UserRepository;

/// Map-backed store with the same uniqueness semantics as `UserStore`.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .lock()?
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        // Check and insert under one lock so concurrent inserts cannot both win
        let mut users = self.lock()?;
        if users.values().any(|existing| existing.email() == user.email()) {
            return Err(AppError::conflict("Email"));
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.lock()?;
        let stored = users.get_mut(&user.id()).ok_or(AppError::NotFound)?;
        stored.update_profile(user.name());
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
