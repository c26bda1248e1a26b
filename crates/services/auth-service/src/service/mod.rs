//! Authentication service business logic.

mod auth_service;
mod authenticate;
mod register;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use authenticate::AuthenticateUser;
pub use register::RegisterUser;
