use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use base64::Engine;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const CHALLENGE_MESSAGE: &str = "Could not verify";

/// Exchange HTTP Basic credentials for an access token.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let (username, password) = basic_credentials(&headers)
        .filter(|(username, password)| !username.is_empty() && !password.is_empty())
        .ok_or_else(challenge)?;

    // A name that could never have registered cannot exist either.
    let username = Username::new(username)
        .map_err(|_| ApiError::NotFound("No such user found".to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::NotFound("No such user found".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, user.id.as_i64())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                tracing::info!(username = %user.username, "Login rejected");
                challenge()
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::ok(AuthenticateResponseData {
        token: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}

fn challenge() -> ApiError {
    ApiError::LoginRequired(CHALLENGE_MESSAGE.to_string())
}

/// Decode `Authorization: Basic <base64(username:password)>`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn basic_header(raw: &str) -> HeaderMap {
        let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_decodes_credentials() {
        assert_eq!(
            basic_credentials(&basic_header("alice:secret1")),
            Some(("alice".to_string(), "secret1".to_string()))
        );
    }

    #[test]
    fn test_password_may_contain_colon() {
        assert_eq!(
            basic_credentials(&basic_header("alice:a:b")),
            Some(("alice".to_string(), "a:b".to_string()))
        );
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(basic_credentials(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic !!!"));
        assert_eq!(basic_credentials(&headers), None);

        assert_eq!(basic_credentials(&HeaderMap::new()), None);
        assert_eq!(basic_credentials(&basic_header("no-colon")), None);
    }
}
