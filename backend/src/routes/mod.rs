//! Route definitions for the clinic administration API.

pub mod dashboard;
pub mod health;
pub mod roles;
pub mod users;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(error = %e, frontend_url, "Invalid FRONTEND_URL, allowing any origin");
            cors.allow_origin(Any)
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready));

    let role_routes = Router::new()
        .route("/roles", post(roles::create))
        .route(
            "/roles/{id}/permissions",
            get(roles::permissions).put(roles::update_permissions),
        );

    let user_routes = Router::new()
        .route("/usuarios", get(users::list))
        .route("/usuarios/{id}", get(users::get_by_id).put(users::update));

    let stats_routes = Router::new().route("/stats/dashboard", get(dashboard::stats));

    let api = Router::new()
        .merge(role_routes)
        .merge(user_routes)
        .merge(stats_routes);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.frontend_url));

    Router::new()
        .merge(health_routes)
        .nest("/api", api)
        .layer(layers)
        .with_state(state)
}
