use std::str::FromStr;
use std::sync::Arc;

use auth::Authenticator;
use auth::TokenService;
use serde_json::json;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracker_service::domain::action::service::ActionService;
use tracker_service::domain::project::service::ProjectService;
use tracker_service::domain::user::service::UserService;
use tracker_service::inbound::http::middleware::ACCESS_TOKEN_HEADER;
use tracker_service::inbound::http::router::create_router;
use tracker_service::inbound::http::router::AppState;
use tracker_service::outbound::database::run_migrations;
use tracker_service::outbound::repositories::SqliteActionRepository;
use tracker_service::outbound::repositories::SqliteProjectRepository;
use tracker_service::outbound::repositories::SqliteUserRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = test_pool().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let project_repository = Arc::new(SqliteProjectRepository::new(pool.clone()));

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::new(SqliteUserRepository::new(
                pool.clone(),
            )))),
            project_service: Arc::new(ProjectService::new(Arc::clone(&project_repository))),
            action_service: Arc::new(ActionService::new(
                Arc::new(SqliteActionRepository::new(pool.clone())),
                project_repository,
            )),
            authenticator: Arc::new(Authenticator::new(
                TEST_SECRET,
                chrono::Duration::minutes(auth::DEFAULT_TOKEN_TTL_MINUTES),
            )),
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with an access token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header(ACCESS_TOKEN_HEADER, token)
    }

    /// Helper to make POST request with an access token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header(ACCESS_TOKEN_HEADER, token)
    }

    /// Helper to make PUT request with an access token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .header(ACCESS_TOKEN_HEADER, token)
    }

    /// Helper to make DELETE request with an access token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .header(ACCESS_TOKEN_HEADER, token)
    }

    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/users/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.get("/api/users/auth")
            .basic_auth(username, Some(password))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return the access token
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        assert_eq!(self.register(username, password).await.status(), 200);

        let body: Value = self
            .login(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }

    /// Create a project and return its JSON representation
    pub async fn create_project(&self, token: &str, name: &str) -> Value {
        let body: Value = self
            .post_authenticated("/api/projects", token)
            .json(&json!({ "name": name, "description": "d", "completed": false }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");
        body["project"].clone()
    }

    pub async fn user_id(&self, username: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to look up user")
    }
}

/// In-memory database on a single long-lived connection
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse database url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open test database");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
