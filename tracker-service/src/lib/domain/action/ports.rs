use async_trait::async_trait;

use super::models::Action;
use super::models::ActionCommand;
use super::models::ActionId;
use super::models::NewAction;
use crate::domain::action::errors::ActionError;
use crate::domain::project::models::ProjectId;
use crate::domain::user::models::UserId;

/// Port for action domain service operations.
///
/// Actions are reachable only through projects the caller owns.
#[async_trait]
pub trait ActionServicePort: Send + Sync + 'static {
    /// Record a new action on a project.
    ///
    /// # Errors
    /// * `ProjectNotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn create_action(
        &self,
        project_id: ProjectId,
        command: ActionCommand,
        caller: UserId,
    ) -> Result<Action, ActionError>;

    /// List the actions of one project.
    ///
    /// # Errors
    /// * `ProjectNotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    async fn list_project_actions(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> Result<Vec<Action>, ActionError>;

    /// Retrieve an action scoped to its project.
    ///
    /// # Errors
    /// * `ProjectNotFound` - Project does not exist
    /// * `NotOwner` - Project belongs to another user
    /// * `NotFound` - No such action in this project
    async fn get_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<Action, ActionError>;

    /// Replace the description and note of an action scoped to its project.
    async fn update_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        command: ActionCommand,
        caller: UserId,
    ) -> Result<Action, ActionError>;

    /// Delete an action scoped to its project.
    async fn delete_project_action(
        &self,
        project_id: ProjectId,
        action_id: ActionId,
        caller: UserId,
    ) -> Result<(), ActionError>;

    /// List every action across the caller's projects.
    async fn list_actions(&self, caller: UserId) -> Result<Vec<Action>, ActionError>;

    /// Retrieve any action by id, provided the caller owns its project.
    ///
    /// # Errors
    /// * `NotFound` - Action does not exist
    /// * `NotOwner` - Action's project belongs to another user
    async fn get_action(&self, action_id: ActionId, caller: UserId)
        -> Result<Action, ActionError>;
}

/// Persistence operations for actions.
#[async_trait]
pub trait ActionRepository: Send + Sync + 'static {
    async fn create(&self, action: NewAction) -> Result<Action, ActionError>;

    async fn find_by_id(&self, id: ActionId) -> Result<Option<Action>, ActionError>;

    /// Look an action up by id, restricted to one project.
    async fn find_in_project(
        &self,
        project_id: ProjectId,
        id: ActionId,
    ) -> Result<Option<Action>, ActionError>;

    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Action>, ActionError>;

    /// Actions of every project owned by `owner`.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Action>, ActionError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, action: Action) -> Result<Action, ActionError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: ActionId) -> Result<(), ActionError>;
}
