use axum::extract::State;

use super::ActionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::action::ports::ActionServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Every action across the caller's projects.
pub async fn list_actions(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<ApiSuccess<Vec<ActionData>>, ApiError> {
    state
        .action_service
        .list_actions(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|actions| ApiSuccess::ok(actions.iter().map(ActionData::from).collect()))
}
