//! User domain entity and related types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MIN_PASSWORD_HASH_LENGTH;
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// The identifier and creation timestamp are assigned once in [`User::new`]
/// and never change. Only the display name is mutable, through
/// [`User::update_profile`]. Email uniqueness is a store concern.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    email: String,
    password_hash: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, validating the entity invariants.
    ///
    /// # Errors
    /// Returns a validation error if the email has no `@` or the password
    /// hash is shorter than [`MIN_PASSWORD_HASH_LENGTH`].
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> DomainResult<Self> {
        let user = Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            created_at: Utc::now(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Rebuild a user from a trusted stored row without re-validating.
    pub fn restore(
        id: Uuid,
        email: String,
        password_hash: String,
        name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
            created_at,
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if !self.email.contains('@') {
            return Err(DomainError::validation("Invalid email"));
        }
        if self.password_hash.len() < MIN_PASSWORD_HASH_LENGTH {
            return Err(DomainError::validation("Invalid password hash"));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Update user's display name
    pub fn update_profile(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

// Don't expose hash in debug output (security)
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$aGFzaA";

    #[test]
    fn test_new_user_is_valid() {
        let user = User::new("ann@example.com", HASH, "Ann").unwrap();

        assert_eq!(user.email(), "ann@example.com");
        assert_eq!(user.password_hash(), HASH);
        assert_eq!(user.name(), "Ann");
        assert!(user.created_at() <= Utc::now());
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("a@example.com", HASH, "A").unwrap();
        let b = User::new("a@example.com", HASH, "A").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let result = User::new("not-an-email", HASH, "Ann");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_empty_email_rejected() {
        assert!(User::new("", HASH, "Ann").is_err());
    }

    #[test]
    fn test_short_hash_rejected() {
        let result = User::new("ann@example.com", "tooshort", "Ann");
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(User::new("ann@example.com", "", "Ann").is_err());
    }

    #[test]
    fn test_hash_length_boundary() {
        assert!(User::new("ann@example.com", "x".repeat(19), "Ann").is_err());
        assert!(User::new("ann@example.com", "x".repeat(20), "Ann").is_ok());
    }

    #[test]
    fn test_name_is_unconstrained() {
        assert!(User::new("ann@example.com", HASH, "").is_ok());
    }

    #[test]
    fn test_restore_keeps_stored_values() {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let user = User::restore(
            id,
            "ann@example.com".to_string(),
            HASH.to_string(),
            "Ann".to_string(),
            created_at,
        );

        assert_eq!(user.id(), id);
        assert_eq!(user.created_at(), created_at);
    }

    #[test]
    fn test_update_profile_changes_name_only() {
        let mut user = User::new("ann@example.com", HASH, "Ann").unwrap();
        let id = user.id();
        let created_at = user.created_at();

        user.update_profile("Anna");

        assert_eq!(user.name(), "Anna");
        assert_eq!(user.id(), id);
        assert_eq!(user.email(), "ann@example.com");
        assert_eq!(user.created_at(), created_at);
    }

    #[test]
    fn test_debug_hides_hash() {
        let user = User::new("ann@example.com", HASH, "Ann").unwrap();
        assert!(!format!("{:?}", user).contains(HASH));
    }

    #[test]
    fn test_response_has_no_hash() {
        let user = User::new("ann@example.com", HASH, "Ann").unwrap();
        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();

        assert!(json.contains("ann@example.com"));
        assert!(!json.contains("argon2"));
    }
}
