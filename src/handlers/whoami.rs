use axum::Extension;
use serde::Serialize;

use crate::middleware::{ApiResponse, AuthUser};

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub sub: String,
    pub name: String,
}

/// GET /api/auth/whoami - display name of the signed-in user
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> ApiResponse<WhoamiResponse> {
    ApiResponse::success(WhoamiResponse {
        sub: user.sub,
        name: user.display_name,
    })
}
