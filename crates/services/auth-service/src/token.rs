//! Token issuance and verification.
//!
//! HS256 bearer tokens with a fixed one-hour lifetime. Verification checks
//! signature, issuer, audience and expiration.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppResult, JwtConfig};
use domain::TOKEN_LIFETIME_SECONDS;

#[cfg(test)]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs identity claims into a bearer token.
#[cfg_attr(test, automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: Uuid, email: &str, name: &str) -> AppResult<String>;
}

/// HMAC-SHA256 JWT issuer.
///
/// Only built from a [`JwtConfig`], which has already checked the secret
/// length. The secret itself is not kept, only the derived keys.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
}

impl JwtIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: Uuid,
        email: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        let expires_at = now + Duration::seconds(TOKEN_LIFETIME_SECONDS);

        let claims = Claims {
            sub: subject,
            email: email.to_string(),
            name: name.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verify signature, issuer, audience and expiration, returning the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation())?;
        Ok(token_data.claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, subject: Uuid, email: &str, name: &str) -> AppResult<String> {
        self.issue_at(subject, email, name, Utc::now())
    }
}
