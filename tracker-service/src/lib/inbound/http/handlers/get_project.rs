use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::PathParams;
use super::ProjectData;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::project::errors::ProjectError;

pub async fn get_project(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(project_id): PathParams<String>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;

    state
        .project_service
        .get_project(project_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::ok(project.into()))
}
