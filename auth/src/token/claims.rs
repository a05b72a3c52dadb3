use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Identifier of the user the token was issued to
    pub id: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(id: i64, exp: i64) -> Self {
        Self { id, exp }
    }

    /// A token stops being valid at the instant of its expiry.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
