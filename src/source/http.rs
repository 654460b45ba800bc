use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::project::Project;

use super::{FetchError, ProjectSource};

/// Error body produced by the service (`{ "error": true, "message": ..., "code": ... }`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WhoamiBody {
    data: WhoamiData,
}

#[derive(Debug, Deserialize)]
struct WhoamiData {
    name: Option<String>,
    sub: String,
}

/// Fetches the project list from a running dashboard service
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpProjectSource {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, FetchError> {
        let token = self.token.as_deref().ok_or(FetchError::Unauthorized)?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                FetchError::data_unavailable(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FetchError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("server responded with {}", status));
            tracing::warn!("GET {} returned {}: {}", path, status, message);
            return Err(FetchError::DataUnavailable(message));
        }
        Ok(response)
    }

    /// Display name of the signed-in user, falling back to the subject
    pub async fn whoami(&self) -> Result<String, FetchError> {
        let body = self
            .get("/api/auth/whoami")
            .await?
            .json::<WhoamiBody>()
            .await
            .map_err(|e| FetchError::data_unavailable(format!("malformed whoami response: {}", e)))?;
        Ok(body.data.name.unwrap_or(body.data.sub))
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let projects = self
            .get("/api/projects")
            .await?
            .json::<Vec<Project>>()
            .await
            .map_err(|e| FetchError::data_unavailable(format!("malformed project list: {}", e)))?;
        tracing::debug!("Fetched {} projects from {}", projects.len(), self.base_url);
        Ok(projects)
    }
}
