//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user entity, its invariants and the workflow commands live here.

pub mod command;
pub mod constants;
pub mod error;
pub mod user;

pub use command::{AuthenticateCommand, RegisterCommand};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserResponse};
