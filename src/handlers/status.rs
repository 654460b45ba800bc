use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::server::AppState;

/// GET / - service information
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Project Dashboard",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Authenticated project list for the dashboard client",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "whoami": "/api/auth/whoami (protected)",
            "projects": "/api/projects (protected)",
        }
    }))
}

/// GET /health - reachability of the project source
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.source.health_check().await {
        Ok(()) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "source": "ok"
        })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ApiResponse::degraded(json!({
                "status": "degraded",
                "timestamp": now,
                "source": "unavailable"
            }))
        }
    }
}
