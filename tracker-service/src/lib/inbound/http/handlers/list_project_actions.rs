use axum::extract::State;

use super::ActionData;
use super::ApiError;
use super::ApiSuccess;
use super::PathParams;
use crate::domain::action::ports::ActionServicePort;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::project::errors::ProjectError;

pub async fn list_project_actions(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(project_id): PathParams<String>,
) -> Result<ApiSuccess<Vec<ActionData>>, ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;

    state
        .action_service
        .list_project_actions(project_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|actions| ApiSuccess::ok(actions.iter().map(ActionData::from).collect()))
}
