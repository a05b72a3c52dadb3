use axum::extract::State;

use super::parse_action_path;
use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use super::PathParams;
use crate::domain::action::ports::ActionServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_project_action(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(path): PathParams<(String, String)>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let (project_id, action_id) = parse_action_path(path)?;

    state
        .action_service
        .delete_project_action(project_id, action_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageData::new("Action Deleted")))
}
