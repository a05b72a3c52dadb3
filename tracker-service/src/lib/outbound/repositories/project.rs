use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::NewProject;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectDescription;
use crate::domain::project::models::ProjectId;
use crate::domain::project::models::ProjectName;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::user::models::UserId;

pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_project(row: SqliteRow) -> Result<Project, ProjectError> {
        Ok(Project {
            id: ProjectId(row.get("id")),
            name: ProjectName::new(row.get("name"))?,
            description: ProjectDescription::new(row.get("description"))?,
            completed: row.get("completed"),
            user_id: UserId(row.get("user_id")),
        })
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (name, description, completed, user_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project.name.as_str())
        .bind(project.description.as_str())
        .bind(project.completed)
        .bind(project.user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        Ok(Project {
            id: ProjectId(result.last_insert_rowid()),
            name: project.name,
            description: project.description,
            completed: project.completed,
            user_id: project.user_id,
        })
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, ProjectError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, completed, user_id
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_project).transpose()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Project>, ProjectError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, completed, user_id
            FROM projects
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_project).collect()
    }

    async fn update(&self, project: Project) -> Result<Project, ProjectError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = ?, description = ?, completed = ?
            WHERE id = ?
            "#,
        )
        .bind(project.name.as_str())
        .bind(project.description.as_str())
        .bind(project.completed)
        .bind(project.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(project.id));
        }

        Ok(project)
    }

    async fn delete(&self, id: ProjectId) -> Result<(), ProjectError> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(id));
        }

        Ok(())
    }
}
