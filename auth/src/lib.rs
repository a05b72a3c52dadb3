//! Authentication primitives for the tracker service.
//!
//! - Password hashing (Argon2id, salted PHC digests)
//! - Signed, time-limited access tokens (HS256) carrying a user id claim
//! - An `Authenticator` combining both for the login flow
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue(42).unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.id, 42);
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::Authenticator;
//! use auth::PasswordHasher;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//!
//! let digest = PasswordHasher::new().hash("password123").unwrap();
//! let result = auth.authenticate("password123", &digest, 7).unwrap();
//!
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.id, 7);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenService;
pub use token::DEFAULT_TOKEN_TTL_MINUTES;
