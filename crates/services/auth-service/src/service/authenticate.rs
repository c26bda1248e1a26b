//! Authenticate workflow.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use common::{AppResult, Deadline};
use domain::AuthenticateCommand;
use user_service_lib::UserRepository;

use crate::password::{verify_blocking, PasswordHasher};
use crate::token::TokenIssuer;

/// Checks credentials and issues a token.
///
/// Unknown email and wrong password both yield `Ok(None)` after the same
/// amount of hashing work: when the user is absent the password is checked
/// against a dummy hash produced by the same hasher. A blank password is a
/// failed login too, whether or not the email exists.
pub struct AuthenticateUser {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
    dummy_hash: String,
}

impl AuthenticateUser {
    /// Build the workflow. Computes the dummy hash once, so call at startup.
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash(&Uuid::new_v4().to_string())?;
        Ok(Self {
            repo,
            hasher,
            issuer,
            dummy_hash,
        })
    }

    /// Authenticate and return a signed token, or `None` on bad credentials.
    pub async fn execute(
        &self,
        command: AuthenticateCommand,
        deadline: &Deadline,
    ) -> AppResult<Option<String>> {
        let AuthenticateCommand { email, password } = command;

        let user = deadline.run(self.repo.find_by_email(&email)).await?;
        if password.trim().is_empty() {
            debug!("Authentication failed: blank password");
            return Ok(None);
        }

        let stored_hash = match &user {
            Some(user) => user.password_hash().to_string(),
            None => self.dummy_hash.clone(),
        };

        deadline.check()?;
        let password_valid = verify_blocking(&self.hasher, password, stored_hash).await?;

        match user {
            Some(user) if password_valid => {
                let token = self.issuer.issue(user.id(), user.email(), user.name())?;
                info!(user_id = %user.id(), "User authenticated");
                Ok(Some(token))
            }
            _ => {
                debug!("Authentication failed");
                Ok(None)
            }
        }
    }
}
