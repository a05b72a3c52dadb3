use axum::extract::State;

use super::ApiError;
use super::ApiSuccess;
use super::ProjectData;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<ApiSuccess<Vec<ProjectData>>, ApiError> {
    state
        .project_service
        .list_projects(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|projects| ApiSuccess::ok(projects.iter().map(ProjectData::from).collect()))
}
