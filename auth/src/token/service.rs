use std::collections::HashSet;

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Issues and validates signed, time-limited bearer tokens.
///
/// Tokens are HS256 JWTs carrying `{id, exp}`. A token is valid only while
/// its signature verifies against the secret this service was built with and
/// the current time is strictly before `exp`. There is no revocation list.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service with the default 30 minute lifetime.
    ///
    /// # Arguments
    /// * `secret` - Signing secret shared by issuance and validation
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    /// Create a token service issuing tokens that live for `ttl`.
    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a token for `user_id` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token could not be signed
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds).
    pub fn issue_at(&self, user_id: i64, now: i64) -> Result<String, TokenError> {
        let claims = AccessClaims::new(user_id, now + self.ttl.num_seconds());

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token against the current time.
    ///
    /// # Errors
    /// * `MalformedToken` - Token cannot be parsed or decoded
    /// * `BadSignature` - Signature does not verify against the secret
    /// * `Expired` - Current time is at or past the embedded expiry
    pub fn validate(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validate a token as if the current time were `now` (Unix seconds).
    pub fn validate_at(&self, token: &str, now: i64) -> Result<AccessClaims, TokenError> {
        // Expiry is compared below with no leeway.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        let claims = decode::<AccessClaims>(token, &self.decoding_key, &validation)?.claims;

        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
