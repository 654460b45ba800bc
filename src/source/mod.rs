pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::project::Project;

pub use http::HttpProjectSource;

/// The two failures a dashboard user can see
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}

impl FetchError {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        FetchError::DataUnavailable(message.into())
    }
}

/// Anything that can produce the full project list. All-or-nothing: there is
/// no partially loaded result.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    /// Cheap reachability check used by `/health`
    async fn health_check(&self) -> Result<(), FetchError> {
        Ok(())
    }
}

/// Fixed in-memory project list
#[derive(Debug, Clone, Default)]
pub struct StaticProjectSource {
    projects: Vec<Project>,
}

impl StaticProjectSource {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl ProjectSource for StaticProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        Ok(self.projects.clone())
    }
}

/// Source that always fails the same way
#[derive(Debug, Clone)]
pub struct FailingProjectSource {
    error: FetchError,
}

impl FailingProjectSource {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ProjectSource for FailingProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        Err(self.error.clone())
    }

    async fn health_check(&self) -> Result<(), FetchError> {
        Err(self.error.clone())
    }
}
