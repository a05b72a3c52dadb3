use std::sync::Arc;

use auth::Authenticator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracker_service::config::Config;
use tracker_service::domain::action::service::ActionService;
use tracker_service::domain::project::service::ProjectService;
use tracker_service::domain::user::service::UserService;
use tracker_service::inbound::http::router::create_router;
use tracker_service::inbound::http::router::AppState;
use tracker_service::outbound::database::initialize_database;
use tracker_service::outbound::repositories::SqliteActionRepository;
use tracker_service::outbound::repositories::SqliteProjectRepository;
use tracker_service::outbound::repositories::SqliteUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "tracker-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pool = initialize_database(&config.database.url, config.database.max_connections).await?;

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::minutes(config.jwt.expiration_minutes),
    ));
    let project_repository = Arc::new(SqliteProjectRepository::new(pool.clone()));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::new(SqliteUserRepository::new(
            pool.clone(),
        )))),
        project_service: Arc::new(ProjectService::new(Arc::clone(&project_repository))),
        action_service: Arc::new(ActionService::new(
            Arc::new(SqliteActionRepository::new(pool)),
            project_repository,
        )),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");

    Ok(())
}
