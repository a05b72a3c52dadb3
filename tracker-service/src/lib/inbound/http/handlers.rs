use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::action::errors::ActionError;
use crate::action::models::Action;
use crate::action::models::ActionId;
use crate::project::errors::ProjectError;
use crate::project::models::Project;
use crate::project::models::ProjectId;
use crate::user::errors::UserError;

pub mod authenticate;
pub mod create_action;
pub mod create_project;
pub mod delete_project;
pub mod delete_project_action;
pub mod get_action;
pub mod get_project;
pub mod get_project_action;
pub mod list_actions;
pub mod list_project_actions;
pub mod list_projects;
pub mod register_user;
pub mod update_project;
pub mod update_project_action;

/// Realm announced in the Basic challenge of the login endpoint.
pub const LOGIN_REALM: &str = "Login required!";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    /// 401 carrying a `WWW-Authenticate: Basic` challenge.
    LoginRequired(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::LoginRequired(msg) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(
                        header::WWW_AUTHENTICATE,
                        format!("Basic realm=\"{}\"", LOGIN_REALM),
                    )],
                    Json(ApiErrorData { message: msg }),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByUsername(_) => {
                ApiError::NotFound("No such user found".to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidPassword(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) => ApiError::NotFound("No such project found".to_string()),
            ProjectError::NotOwner { .. } => {
                ApiError::Forbidden("You do not own this project".to_string())
            }
            ProjectError::InvalidProjectId(_) | ProjectError::InvalidField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ProjectError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::ProjectNotFound(_) => {
                ApiError::NotFound("No such project found".to_string())
            }
            ActionError::NotFound(_) => ApiError::NotFound("No such action found".to_string()),
            ActionError::NotOwner { .. } => {
                ApiError::Forbidden("You do not own this project".to_string())
            }
            ActionError::InvalidActionId(_) | ActionError::InvalidField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ActionError::DatabaseError(_) | ActionError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// `axum::Json` whose rejections render as `400 {"message": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejections render as `400 {"message": ...}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParams<T>(pub T);

/// Parse the `/api/projects/:project_id/actions/:action_id` segments.
fn parse_action_path(
    (project_id, action_id): (String, String),
) -> Result<(ProjectId, ActionId), ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;
    let action_id = ActionId::from_string(&action_id).map_err(ActionError::from)?;
    Ok((project_id, action_id))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub user_id: i64,
}

impl From<&Project> for ProjectData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.0,
            name: project.name.as_str().to_string(),
            description: project.description.as_str().to_string(),
            completed: project.completed,
            user_id: project.user_id.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionData {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub note: Option<String>,
}

impl From<&Action> for ActionData {
    fn from(action: &Action) -> Self {
        Self {
            id: action.id.0,
            project_id: action.project_id.0,
            description: action.description.as_str().to_string(),
            note: action.note.as_ref().map(|n| n.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::user::models::UserId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("No such project found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "No such project found"})
        );
    }

    #[tokio::test]
    async fn test_login_required_carries_challenge() {
        let response = ApiError::LoginRequired("Could not verify".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"Login required!\""
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            ApiError::InternalServerError("disk I/O error".to_string()).into_response();
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn test_project_errors_map_to_status() {
        assert_eq!(
            ApiError::from(ProjectError::NotFound(ProjectId(1))),
            ApiError::NotFound("No such project found".to_string())
        );
        assert_eq!(
            ApiError::from(ProjectError::NotOwner {
                project_id: ProjectId(1),
                user_id: UserId(2),
            }),
            ApiError::Forbidden("You do not own this project".to_string())
        );
    }

    #[test]
    fn test_duplicate_username_is_conflict() {
        let err = ApiError::from(UserError::UsernameAlreadyExists("alice".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}
