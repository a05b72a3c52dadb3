use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::action::errors::ActionError;
use crate::domain::action::models::Action;
use crate::domain::action::models::ActionDescription;
use crate::domain::action::models::ActionId;
use crate::domain::action::models::ActionNote;
use crate::domain::action::models::NewAction;
use crate::domain::action::ports::ActionRepository;
use crate::domain::project::models::ProjectId;
use crate::domain::user::models::UserId;

pub struct SqliteActionRepository {
    pool: SqlitePool,
}

impl SqliteActionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_action(row: SqliteRow) -> Result<Action, ActionError> {
        let note: Option<String> = row.get("note");

        Ok(Action {
            id: ActionId(row.get("id")),
            project_id: ProjectId(row.get("project_id")),
            description: ActionDescription::new(row.get("description"))?,
            note: note.map(ActionNote::new).transpose()?,
        })
    }
}

#[async_trait]
impl ActionRepository for SqliteActionRepository {
    async fn create(&self, action: NewAction) -> Result<Action, ActionError> {
        let result = sqlx::query(
            r#"
            INSERT INTO actions (project_id, description, note)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(action.project_id.0)
        .bind(action.description.as_str())
        .bind(action.note.as_ref().map(|n| n.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        Ok(Action {
            id: ActionId(result.last_insert_rowid()),
            project_id: action.project_id,
            description: action.description,
            note: action.note,
        })
    }

    async fn find_by_id(&self, id: ActionId) -> Result<Option<Action>, ActionError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, description, note
            FROM actions
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_action).transpose()
    }

    async fn find_in_project(
        &self,
        project_id: ProjectId,
        id: ActionId,
    ) -> Result<Option<Action>, ActionError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, description, note
            FROM actions
            WHERE id = ? AND project_id = ?
            "#,
        )
        .bind(id.0)
        .bind(project_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_action).transpose()
    }

    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Action>, ActionError> {
        let rows = sqlx::query(
            r#"
            SELECT id, project_id, description, note
            FROM actions
            WHERE project_id = ?
            ORDER BY id
            "#,
        )
        .bind(project_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_action).collect()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Action>, ActionError> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.project_id, a.description, a.note
            FROM actions a
            JOIN projects p ON p.id = a.project_id
            WHERE p.user_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_action).collect()
    }

    async fn update(&self, action: Action) -> Result<Action, ActionError> {
        let result = sqlx::query(
            r#"
            UPDATE actions
            SET description = ?, note = ?
            WHERE id = ?
            "#,
        )
        .bind(action.description.as_str())
        .bind(action.note.as_ref().map(|n| n.as_str()))
        .bind(action.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ActionError::NotFound(action.id));
        }

        Ok(action)
    }

    async fn delete(&self, id: ActionId) -> Result<(), ActionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM actions
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ActionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ActionError::NotFound(id));
        }

        Ok(())
    }
}
