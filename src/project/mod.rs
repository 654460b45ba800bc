pub mod date;
pub mod source_type;

use serde::{Deserialize, Serialize};

pub use date::{format_date, parse_date};
pub use source_type::{SourceType, StageClass};

/// Display/compare substitute for any absent or blank field
pub const NOT_SPECIFIED: &str = "Not specified";

/// Substitute the sentinel for absent, empty or whitespace-only values
pub fn sentinel(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// True when the value would be replaced by the sentinel
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// A project record as stored in the `projects` table.
///
/// Read-only snapshot: every optional column may be NULL, missing from the JSON
/// payload, or an empty string. None of these cases are normalized here; callers
/// go through [`sentinel`] when they need a user-facing value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub stakeholders: Option<String>,
    #[serde(default)]
    pub project_value: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
}

/// Text columns of a project, in table/export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ProjectName,
    Location,
    ProjectType,
    Stage,
    Stakeholders,
    ProjectValue,
    SourceLink,
    DateAdded,
}

impl TextField {
    pub const ALL: [TextField; 8] = [
        TextField::ProjectName,
        TextField::Location,
        TextField::ProjectType,
        TextField::Stage,
        TextField::Stakeholders,
        TextField::ProjectValue,
        TextField::SourceLink,
        TextField::DateAdded,
    ];
}

impl Project {
    /// Raw value of a text column
    pub fn raw(&self, field: TextField) -> Option<&str> {
        let value = match field {
            TextField::ProjectName => &self.project_name,
            TextField::Location => &self.location,
            TextField::ProjectType => &self.project_type,
            TextField::Stage => &self.stage,
            TextField::Stakeholders => &self.stakeholders,
            TextField::ProjectValue => &self.project_value,
            TextField::SourceLink => &self.source_link,
            TextField::DateAdded => &self.date_added,
        };
        value.as_deref()
    }

    /// Sentinel-substituted value of a text column
    pub fn text(&self, field: TextField) -> &str {
        sentinel(self.raw(field))
    }

    pub fn stage_text(&self) -> &str {
        self.text(TextField::Stage)
    }

    pub fn type_text(&self) -> &str {
        self.text(TextField::ProjectType)
    }

    pub fn source_type(&self) -> SourceType {
        SourceType::classify(self.source_link.as_deref())
    }

    pub fn stage_class(&self) -> StageClass {
        StageClass::classify(self.stage.as_deref())
    }

    /// Haystack for free-text search: every field, sentinel-substituted, lowercased
    pub fn search_text(&self) -> String {
        let mut out = self.id.to_string();
        for field in TextField::ALL {
            out.push(' ');
            out.push_str(self.text(field));
        }
        out.to_lowercase()
    }
}
