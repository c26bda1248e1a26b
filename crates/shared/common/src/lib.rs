//! Common utilities shared across all crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP mapping
//! - Configuration structures loaded from the environment
//! - Request deadlines

pub mod config;
pub mod deadline;
pub mod error;

pub use config::*;
pub use deadline::Deadline;
pub use error::{AppError, AppResult, OptionExt};
