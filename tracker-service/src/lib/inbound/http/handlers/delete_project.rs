use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use super::PathParams;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::project::errors::ProjectError;

pub async fn delete_project(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(project_id): PathParams<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;

    state
        .project_service
        .delete_project(project_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageData::new("Project Deleted")))
}
