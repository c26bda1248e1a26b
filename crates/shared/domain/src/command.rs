//! Workflow input commands.
//!
//! Transient value objects decoded from requests. Never persisted.

use std::fmt;

/// Input of the register workflow.
#[derive(Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterCommand {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

/// Input of the authenticate workflow.
#[derive(Clone)]
pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
}

impl AuthenticateCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthenticateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let register = RegisterCommand::new("a@b.com", "Secr3t!", "Ann");
        let login = AuthenticateCommand::new("a@b.com", "Secr3t!");

        assert!(!format!("{:?}", register).contains("Secr3t!"));
        assert!(!format!("{:?}", login).contains("Secr3t!"));
        assert!(format!("{:?}", login).contains("a@b.com"));
    }
}
