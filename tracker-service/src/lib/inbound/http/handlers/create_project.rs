use axum::extract::State;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::ProjectData;
use crate::domain::project::models::ProjectCommand;
use crate::domain::project::models::ProjectDescription;
use crate::domain::project::models::ProjectName;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::project::errors::ProjectFieldError;

pub async fn create_project(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    JsonBody(body): JsonBody<ProjectRequest>,
) -> Result<ApiSuccess<CreateProjectResponseData>, ApiError> {
    state
        .project_service
        .create_project(body.try_into_command()?, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref project| {
            ApiSuccess::ok(CreateProjectResponseData {
                message: "Project Added".to_string(),
                project: project.into(),
            })
        })
}

/// HTTP request body for creating or replacing a project (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRequest {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl ProjectRequest {
    pub(super) fn try_into_command(self) -> Result<ProjectCommand, ProjectFieldError> {
        Ok(ProjectCommand {
            name: ProjectName::new(self.name)?,
            description: ProjectDescription::new(self.description)?,
            completed: self.completed,
        })
    }
}

impl From<ProjectFieldError> for ApiError {
    fn from(err: ProjectFieldError) -> Self {
        ApiError::BadRequest(format!("Invalid project: {}", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProjectResponseData {
    pub message: String,
    pub project: ProjectData,
}
