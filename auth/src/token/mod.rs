pub mod claims;
pub mod errors;
pub mod service;

pub use claims::AccessClaims;
pub use errors::TokenError;
pub use service::TokenService;
pub use service::DEFAULT_TOKEN_TTL_MINUTES;
