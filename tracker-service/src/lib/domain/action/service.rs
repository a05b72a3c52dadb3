use std::sync::Arc;

use async_trait::async_trait;

use super::errors::ActionError;
use super::models::Action;
use super::models::ActionCommand;
use super::models::ActionId;
use super::models::NewAction;
use super::ports::ActionRepository;
use super::ports::ActionServicePort;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::user::models::UserId;

/// Concrete implementation of ActionServicePort.
///
/// Reads projects through the project repository to authorize every call
/// against the owning user.
pub struct ActionService<AR, PR>
where
    AR: ActionRepository,
    PR: ProjectRepository,
{
    action_repository: Arc<AR>,
    project_repository: Arc<PR>,
}

impl<AR, PR> ActionService<AR, PR>
where
    AR: ActionRepository,
    PR: ProjectRepository,
{
    pub fn new(action_repository: Arc<AR>, project_repository: Arc<PR>) -> Self {
        Self {
            action_repository,
            project_repository,
        }
    }

    async fn owned_project(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> Result<Project, ActionError> {
        let project = self
            .project_repository
            .find_by_id(project_id)
            .await?
            .ok_or(ActionError::ProjectNotFound(project_id))?;

        if !project.is_owned_by(caller) {
            return Err(ActionError::NotOwner {
                project_id,
                user_id: caller,
            });
        }

        Ok(project)
    }

    async fn owned_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<Action, ActionError> {
        self.owned_project(project_id, caller).await?;

        self.action_repository
            .find_in_project(project_id, action_id)
            .await?
            .ok_or(ActionError::NotFound(action_id))
    }
}

#[async_trait]
impl<AR, PR> ActionServicePort for ActionService<AR, PR>
where
    AR: ActionRepository,
    PR: ProjectRepository,
{
    async fn create_action(
        &self,
        project_id: ProjectId,
        command: ActionCommand,
        caller: UserId,
    ) -> Result<Action, ActionError> {
        self.owned_project(project_id, caller).await?;

        self.action_repository
            .create(NewAction::from_command(command, project_id))
            .await
    }

    async fn list_project_actions(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> Result<Vec<Action>, ActionError> {
        self.owned_project(project_id, caller).await?;
        self.action_repository.list_by_project(project_id).await
    }

    async fn get_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<Action, ActionError> {
        self.owned_project_action(project_id, action_id, caller)
            .await
    }

    async fn update_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        command: ActionCommand,
        caller: UserId,
    ) -> Result<Action, ActionError> {
        let mut action = self
            .owned_project_action(project_id, action_id, caller)
            .await?;
        action.apply(command);

        self.action_repository.update(action).await
    }

    async fn delete_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<(), ActionError> {
        self.owned_project_action(project_id, action_id, caller)
            .await?;
        self.action_repository.delete(action_id).await
    }

    async fn list_actions(&self, caller: UserId) -> Result<Vec<Action>, ActionError> {
        self.action_repository.list_by_owner(caller).await
    }

    async fn get_action(
        &self,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<Action, ActionError> {
        let action = self
            .action_repository
            .find_by_id(action_id)
            .await?
            .ok_or(ActionError::NotFound(action_id))?;

        self.owned_project(action.project_id, caller)
            .await
            .map_err(|e| match e {
                ActionError::ProjectNotFound(_) => ActionError::NotFound(action_id),
                other => other,
            })?;

        Ok(action)
    }
}
