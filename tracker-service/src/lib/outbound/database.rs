use std::str::FromStr;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;
use sqlx::SqlitePool;

/// Open the SQLite pool behind `database_url`, creating the database file
/// when missing, and apply pending migrations.
pub async fn initialize_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    if !Sqlite::database_exists(database_url).await? {
        tracing::info!(database_url = %database_url, "Creating database");
        Sqlite::create_database(database_url).await?;
    }

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(
        max_connections = max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    Ok(())
}
