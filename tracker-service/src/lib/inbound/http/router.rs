use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_action::create_action;
use super::handlers::create_project::create_project;
use super::handlers::delete_project::delete_project;
use super::handlers::delete_project_action::delete_project_action;
use super::handlers::get_action::get_action;
use super::handlers::get_project::get_project;
use super::handlers::get_project_action::get_project_action;
use super::handlers::list_actions::list_actions;
use super::handlers::list_project_actions::list_project_actions;
use super::handlers::list_projects::list_projects;
use super::handlers::register_user::register_user;
use super::handlers::update_project::update_project;
use super::handlers::update_project_action::update_project_action;
use super::middleware::authenticate as auth_middleware;
use crate::domain::action::service::ActionService;
use crate::domain::project::service::ProjectService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::SqliteActionRepository;
use crate::outbound::repositories::SqliteProjectRepository;
use crate::outbound::repositories::SqliteUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub project_service: Arc<ProjectService<SqliteProjectRepository>>,
    pub action_service: Arc<ActionService<SqliteActionRepository, SqliteProjectRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/auth", get(authenticate));

    let protected_routes = Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/projects/:project_id/actions",
            get(list_project_actions).post(create_action),
        )
        .route(
            "/api/projects/:project_id/actions/:action_id",
            get(get_project_action)
                .put(update_project_action)
                .delete(delete_project_action),
        )
        .route("/api/actions", get(list_actions))
        .route("/api/actions/:action_id", get(get_action))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
