use thiserror::Error;

use crate::domain::action::models::ActionId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::ProjectId;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionIdError {
    #[error("Invalid action id: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionFieldError {
    #[error("Action description is empty")]
    EmptyDescription,

    #[error("Action description too long: maximum {max} characters, got {actual}")]
    DescriptionTooLong { max: usize, actual: usize },

    #[error("Action note too long: maximum {max} characters, got {actual}")]
    NoteTooLong { max: usize, actual: usize },
}

/// Top-level error type for all action-related operations
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid action ID: {0}")]
    InvalidActionId(#[from] ActionIdError),

    #[error("Invalid action: {0}")]
    InvalidField(#[from] ActionFieldError),

    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Action not found: {0}")]
    NotFound(ActionId),

    #[error("User {user_id} does not own project {project_id}")]
    NotOwner {
        project_id: ProjectId,
        user_id: UserId,
    },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ProjectError> for ActionError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => ActionError::ProjectNotFound(id),
            ProjectError::NotOwner {
                project_id,
                user_id,
            } => ActionError::NotOwner {
                project_id,
                user_id,
            },
            ProjectError::DatabaseError(msg) => ActionError::DatabaseError(msg),
            other => ActionError::Unknown(other.to_string()),
        }
    }
}
