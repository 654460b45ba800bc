use axum::{extract::State, Extension, Json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::project::Project;
use crate::server::AppState;

/// GET /api/projects - the full project list as a bare JSON array.
///
/// Failures come back as the standard error object with a `message`, which
/// clients surface as "data unavailable".
pub async fn projects_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.source.fetch_projects().await?;
    tracing::debug!("Serving {} projects to {}", projects.len(), user.sub);
    Ok(Json(projects))
}
