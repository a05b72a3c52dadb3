use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: SqliteRow) -> User {
        User {
            id: UserId(row.get("id")),
            username: Username::from_stored(row.get("username")),
            password_hash: row.get("password_hash"),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?, ?)
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(User {
            id: UserId(result.last_insert_rowid()),
            username: user.username,
            password_hash: user.password_hash,
        })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(Self::row_to_user))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(Self::row_to_user))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::outbound::database::run_migrations;

    async fn repository() -> SqliteUserRepository {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        SqliteUserRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repository = repository().await;

        let created = repository
            .create(NewUser {
                username: Username::new("alice".to_string()).unwrap(),
                password_hash: "digest".to_string(),
            })
            .await
            .unwrap();

        let found = repository.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_stored_name_outside_policy_still_loads() {
        let repository = repository().await;

        // Written before the three character minimum existed.
        let id = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind("ab")
            .bind("digest")
            .execute(&repository.pool)
            .await
            .unwrap()
            .last_insert_rowid();

        let by_id = repository.find_by_id(&UserId(id)).await.unwrap().unwrap();
        assert_eq!(by_id.username.as_str(), "ab");

        let by_name = repository
            .find_by_username(&Username::from_stored("ab".to_string()))
            .await
            .unwrap();
        assert_eq!(by_name.map(|u| u.id), Some(UserId(id)));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repository = repository().await;
        let new_user = || NewUser {
            username: Username::new("alice".to_string()).unwrap(),
            password_hash: "digest".to_string(),
        };

        repository.create(new_user()).await.unwrap();
        let result = repository.create(new_user()).await;

        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }
}
