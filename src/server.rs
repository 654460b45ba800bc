use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;
use crate::source::ProjectSource;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ProjectSource>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn ProjectSource>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Router without environment-dependent layers
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Protected
        .merge(protected_routes(&state))
        .with_state(state)
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/whoami", get(handlers::whoami_get))
        .route("/api/projects", get(handlers::projects_get))
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware))
}

/// Full service router with request tracing and CORS applied from configuration
pub fn app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = app(state);
    if config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if !config.security.enable_cors {
        return router;
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    router.layer(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET])
            .allow_headers([axum::http::header::AUTHORIZATION, axum::http::header::CONTENT_TYPE]),
    )
}
