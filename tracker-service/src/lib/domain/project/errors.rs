use thiserror::Error;

use crate::domain::project::models::ProjectId;
use crate::domain::user::models::UserId;

/// Error type for ProjectId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectIdError {
    #[error("Invalid project id: {0}")]
    InvalidFormat(String),
}

/// Error type for project field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectFieldError {
    #[error("Project name is empty")]
    EmptyName,

    #[error("Project name too long: maximum {max} characters, got {actual}")]
    NameTooLong { max: usize, actual: usize },

    #[error("Project description too long: maximum {max} characters, got {actual}")]
    DescriptionTooLong { max: usize, actual: usize },
}

/// Top-level error type for all project-related operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Invalid project ID: {0}")]
    InvalidProjectId(#[from] ProjectIdError),

    #[error("Invalid project: {0}")]
    InvalidField(#[from] ProjectFieldError),

    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("User {user_id} does not own project {project_id}")]
    NotOwner {
        project_id: ProjectId,
        user_id: UserId,
    },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
