use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Request header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Identity resolved by [`authenticate`] and stored in request extensions.
///
/// `None` when the token verified but its user no longer exists.
#[derive(Debug, Clone)]
pub struct SessionIdentity(pub Option<User>);

/// Authenticated caller, extracted by handlers behind [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<SessionIdentity>() {
            Some(SessionIdentity(Some(user))) => Ok(AuthenticatedUser { user_id: user.id }),
            _ => Err(ApiError::Unauthorized("Not logged In".to_string())),
        }
    }
}

/// Middleware that validates the access token and attaches the caller's
/// identity to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .ok_or_else(|| ApiError::Unauthorized("Token is missing".to_string()))?
        .to_str()
        .map_err(|_| {
            tracing::warn!("Access token header is not valid ASCII");
            ApiError::Unauthorized("Token is invalid".to_string())
        })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Access token rejected");
        ApiError::Unauthorized("Token is invalid".to_string())
    })?;

    let user = state.user_service.find_user(&UserId(claims.id)).await?;
    if user.is_none() {
        tracing::warn!(user_id = claims.id, "Access token refers to a missing user");
    }

    req.extensions_mut().insert(SessionIdentity(user));

    Ok(next.run(req).await)
}
