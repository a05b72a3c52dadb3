use axum::extract::State;
use serde::Deserialize;
use serde::Serialize;

use super::ActionData;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::PathParams;
use crate::action::errors::ActionFieldError;
use crate::domain::action::models::ActionCommand;
use crate::domain::action::models::ActionDescription;
use crate::domain::action::models::ActionNote;
use crate::domain::action::ports::ActionServicePort;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::project::errors::ProjectError;

pub async fn create_action(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    PathParams(project_id): PathParams<String>,
    JsonBody(body): JsonBody<ActionRequest>,
) -> Result<ApiSuccess<CreateActionResponseData>, ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;

    state
        .action_service
        .create_action(project_id, body.try_into_command()?, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref action| {
            ApiSuccess::ok(CreateActionResponseData {
                message: "Action Added".to_string(),
                action: action.into(),
            })
        })
}

/// HTTP request body for creating or replacing an action (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionRequest {
    description: String,
    #[serde(default)]
    note: Option<String>,
}

impl ActionRequest {
    pub(super) fn try_into_command(self) -> Result<ActionCommand, ActionFieldError> {
        Ok(ActionCommand {
            description: ActionDescription::new(self.description)?,
            note: self.note.map(ActionNote::new).transpose()?,
        })
    }
}

impl From<ActionFieldError> for ApiError {
    fn from(err: ActionFieldError) -> Self {
        ApiError::BadRequest(format!("Invalid action: {}", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateActionResponseData {
    pub message: String,
    pub action: ActionData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_is_optional() {
        let body: ActionRequest = serde_json::from_str(r#"{"description":"call"}"#).unwrap();
        assert!(body.try_into_command().unwrap().note.is_none());
    }

    #[test]
    fn test_description_is_required() {
        assert!(serde_json::from_str::<ActionRequest>(r#"{"note":"n"}"#).is_err());
    }

    #[test]
    fn test_long_note_rejected() {
        let body = ActionRequest {
            description: "call".to_string(),
            note: Some("n".repeat(251)),
        };
        assert!(matches!(
            body.try_into_command(),
            Err(ActionFieldError::NoteTooLong { .. })
        ));
    }
}
