pub mod csv;
pub mod html;
pub mod json;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::project::Project;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Html,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html",
        }
    }

    /// `{base}_{date}.csv`, `{base}_{date}.json`, `{base}_report_{date}.html`
    pub fn filename(&self, base: &str, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d");
        match self {
            ExportFormat::Csv => format!("{}_{}.csv", base, date),
            ExportFormat::Json => format!("{}_{}.json", base, date),
            ExportFormat::Html => format!("{}_report_{}.html", base, date),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}

/// Serialized bytes plus what the download needs to name and type them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: &'static str,
}

/// Serialize projects in the order given. `today` stamps the filename and the
/// HTML report header.
pub fn serialize(
    projects: &[&Project],
    format: ExportFormat,
    base: &str,
    today: NaiveDate,
) -> Result<Export, ExportError> {
    let bytes = match format {
        ExportFormat::Csv => csv::to_csv(projects).into_bytes(),
        ExportFormat::Json => json::to_json(projects)?,
        ExportFormat::Html => html::to_html(projects, today).into_bytes(),
    };

    tracing::debug!(format = ?format, records = projects.len(), bytes = bytes.len(), "serialized export");

    Ok(Export {
        bytes,
        filename: format.filename(base, today),
        mime: format.mime_type(),
    })
}

/// Export date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
