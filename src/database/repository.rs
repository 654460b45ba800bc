use async_trait::async_trait;
use sqlx::PgPool;

use crate::config;
use crate::project::Project;
use crate::source::{FetchError, ProjectSource};

use super::manager::{DatabaseError, DatabaseManager};

/// Reads the project list from Postgres
#[derive(Debug, Clone)]
pub struct PgProjectSource {
    table: String,
    max_rows: i64,
    pool: Option<PgPool>,
}

impl PgProjectSource {
    /// Uses the shared pool from [`DatabaseManager`] and the configured table
    pub fn from_config() -> Result<Self, DatabaseError> {
        let settings = &config::config().database;
        Self::new(&settings.projects_table, settings.max_rows)
    }

    pub fn new(table: &str, max_rows: i64) -> Result<Self, DatabaseError> {
        if !DatabaseManager::is_valid_table_name(table) {
            return Err(DatabaseError::InvalidTableName(table.to_string()));
        }
        Ok(Self {
            table: table.to_string(),
            max_rows: max_rows.max(1),
            pool: None,
        })
    }

    /// Use an explicit pool instead of the shared one
    pub fn with_pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// The single SELECT issued per fetch. Every column is read as text so the
    /// record shape does not depend on the column types.
    pub fn select_sql(&self) -> String {
        let table = self
            .table
            .split('.')
            .map(DatabaseManager::quote_identifier)
            .collect::<Vec<_>>()
            .join(".");
        format!(
            "SELECT id::bigint AS id, \
             project_name::text AS project_name, \
             location::text AS location, \
             project_type::text AS project_type, \
             stage::text AS stage, \
             stakeholders::text AS stakeholders, \
             project_value::text AS project_value, \
             source_link::text AS source_link, \
             date_added::text AS date_added \
             FROM {} ORDER BY id LIMIT $1",
            table
        )
    }

    async fn pool(&self) -> Result<PgPool, DatabaseError> {
        match &self.pool {
            Some(pool) => Ok(pool.clone()),
            None => DatabaseManager::pool().await,
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        let pool = self.pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Project>, DatabaseError> {
        let pool = self.pool().await?;
        let projects = sqlx::query_as::<_, Project>(&self.select_sql())
            .bind(self.max_rows)
            .fetch_all(&pool)
            .await?;
        Ok(projects)
    }
}

#[async_trait]
impl ProjectSource for PgProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let started = std::time::Instant::now();
        match self.load().await {
            Ok(projects) => {
                tracing::info!(
                    "Loaded {} projects from {} in {}ms",
                    projects.len(),
                    self.table,
                    started.elapsed().as_millis()
                );
                Ok(projects)
            }
            Err(e) => {
                tracing::error!("Failed to load projects from {}: {}", self.table, e);
                Err(FetchError::data_unavailable("Failed to load projects"))
            }
        }
    }

    async fn health_check(&self) -> Result<(), FetchError> {
        self.ping().await.map_err(|e| {
            tracing::warn!("Database ping failed: {}", e);
            FetchError::data_unavailable("Database unreachable")
        })
    }
}
