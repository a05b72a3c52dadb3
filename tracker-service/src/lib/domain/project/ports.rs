use async_trait::async_trait;

use super::models::NewProject;
use super::models::Project;
use super::models::ProjectCommand;
use super::models::ProjectId;
use crate::domain::project::errors::ProjectError;
use crate::domain::user::models::UserId;

/// Port for project domain service operations.
///
/// Every operation takes the authenticated caller and only ever touches
/// projects that caller owns.
#[async_trait]
pub trait ProjectServicePort: Send + Sync + 'static {
    /// Create a project owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_project(
        &self,
        command: ProjectCommand,
        owner: UserId,
    ) -> Result<Project, ProjectError>;

    /// List the projects owned by `owner`.
    async fn list_projects(&self, owner: UserId) -> Result<Vec<Project>, ProjectError>;

    /// Retrieve a project owned by `caller`.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_project(&self, id: ProjectId, caller: UserId) -> Result<Project, ProjectError>;

    /// Replace the name, description and completion flag of a project.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_project(
        &self,
        id: ProjectId,
        command: ProjectCommand,
        caller: UserId,
    ) -> Result<Project, ProjectError>;

    /// Delete a project and, through the store, its actions.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_project(&self, id: ProjectId, caller: UserId) -> Result<(), ProjectError>;
}

/// Persistence operations for the project aggregate.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError>;

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, ProjectError>;

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Project>, ProjectError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, project: Project) -> Result<Project, ProjectError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: ProjectId) -> Result<(), ProjectError>;
}
