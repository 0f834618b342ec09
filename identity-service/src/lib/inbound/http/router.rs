use std::sync::Arc;
use std::time::Duration;

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

use super::handlers::create_user::create_user;
use super::handlers::get_user::get_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::middleware::require_auth;
use super::middleware::AuthGate;
use crate::domain::user::service::UserDirectory;
use crate::user::ports::UserStore;

/// Application state shared by the handlers.
///
/// Generic over the store so tests can wire in a double.
pub struct AppState<S: UserStore> {
    pub user_directory: Arc<UserDirectory<S>>,
    pub auth_gate: Arc<AuthGate>,
}

impl<S: UserStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_directory: Arc::clone(&self.user_directory),
            auth_gate: Arc::clone(&self.auth_gate),
        }
    }
}

pub fn create_router<S: UserStore>(
    user_directory: Arc<UserDirectory<S>>,
    auth_gate: Arc<AuthGate>,
) -> Router {
    let state = AppState {
        user_directory,
        auth_gate,
    };

    let public_routes = Router::new()
        .route("/users/register", post(register_user::<S>))
        .route("/users/login", post(login::<S>));

    // Axum does not normalize trailing slashes; clients of the original
    // service use both forms of the collection path.
    let protected_routes = Router::new()
        .route("/users", post(create_user::<S>).get(list_users::<S>))
        .route("/users/", post(create_user::<S>).get(list_users::<S>))
        .route("/users/:id", get(get_user::<S>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.auth_gate),
            require_auth,
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
