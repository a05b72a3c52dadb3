use axum::extract::State;

use super::ActionData;
use super::ApiError;
use super::ApiSuccess;
use super::PathParams;
use crate::action::errors::ActionError;
use crate::domain::action::models::ActionId;
use crate::domain::action::ports::ActionServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_action(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(action_id): PathParams<String>,
) -> Result<ApiSuccess<ActionData>, ApiError> {
    let action_id = ActionId::from_string(&action_id).map_err(ActionError::from)?;

    state
        .action_service
        .get_action(action_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref action| ApiSuccess::ok(action.into()))
}
