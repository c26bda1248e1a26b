//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User
// =============================================================================

/// Shortest password hash the entity accepts (sanity floor, not a crypto guarantee)
pub const MIN_PASSWORD_HASH_LENGTH: usize = 20;

/// Maximum stored email length
pub const MAX_EMAIL_LENGTH: usize = 256;

/// Maximum stored display name length
pub const MAX_NAME_LENGTH: usize = 200;

// =============================================================================
// Authentication
// =============================================================================

/// Lifetime of an issued token in seconds (one hour)
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Minimum JWT secret length in bytes (HMAC-SHA256 security margin)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
