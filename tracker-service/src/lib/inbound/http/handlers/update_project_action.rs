use axum::extract::State;

use super::create_action::ActionRequest;
use super::parse_action_path;
use super::ActionData;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::PathParams;
use crate::domain::action::ports::ActionServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_project_action(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(path): PathParams<(String, String)>,
    JsonBody(body): JsonBody<ActionRequest>,
) -> Result<ApiSuccess<ActionData>, ApiError> {
    let (project_id, action_id) = parse_action_path(path)?;

    state
        .action_service
        .update_project_action(
            project_id,
            action_id,
            body.try_into_command()?,
            caller.user_id,
        )
        .await
        .map_err(ApiError::from)
        .map(|ref action| ApiSuccess::ok(action.into()))
}
