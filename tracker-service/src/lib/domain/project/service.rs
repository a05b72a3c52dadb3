use std::sync::Arc;

use async_trait::async_trait;

use super::errors::ProjectError;
use super::models::NewProject;
use super::models::Project;
use super::models::ProjectCommand;
use super::models::ProjectId;
use super::ports::ProjectRepository;
use super::ports::ProjectServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of ProjectServicePort.
///
/// Generic over repository for testability.
pub struct ProjectService<PR>
where
    PR: ProjectRepository,
{
    project_repository: Arc<PR>,
}

impl<PR> ProjectService<PR>
where
    PR: ProjectRepository,
{
    pub fn new(project_repository: Arc<PR>) -> Self {
        Self { project_repository }
    }

    async fn owned_project(&self, id: ProjectId, caller: UserId) -> Result<Project, ProjectError> {
        let project = self
            .project_repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))?;

        if !project.is_owned_by(caller) {
            return Err(ProjectError::NotOwner {
                project_id: id,
                user_id: caller,
            });
        }

        Ok(project)
    }
}

#[async_trait]
impl<PR> ProjectServicePort for ProjectService<PR>
where
    PR: ProjectRepository,
{
    async fn create_project(
        &self,
        command: ProjectCommand,
        owner: UserId,
    ) -> Result<Project, ProjectError> {
        let project = self
            .project_repository
            .create(NewProject::from_command(command, owner))
            .await?;

        tracing::debug!(project_id = %project.id, user_id = %owner, "Project created");

        Ok(project)
    }

    async fn list_projects(&self, owner: UserId) -> Result<Vec<Project>, ProjectError> {
        self.project_repository.list_by_owner(owner).await
    }

    async fn get_project(&self, id: ProjectId, caller: UserId) -> Result<Project, ProjectError> {
        self.owned_project(id, caller).await
    }

    async fn update_project(
        &self,
        id: ProjectId,
        command: ProjectCommand,
        caller: UserId,
    ) -> Result<Project, ProjectError> {
        let mut project = self.owned_project(id, caller).await?;
        project.apply(command);

        self.project_repository.update(project).await
    }

    async fn delete_project(&self, id: ProjectId, caller: UserId) -> Result<(), ProjectError> {
        self.owned_project(id, caller).await?;
        self.project_repository.delete(id).await?;

        tracing::debug!(project_id = %id, user_id = %caller, "Project deleted");

        Ok(())
    }
}
