use serde::{Deserialize, Serialize};

use crate::project::Project;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const PAGE_SIZE_CHOICES: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    ProjectName,
    Location,
    ProjectType,
    Stage,
    Stakeholders,
    ProjectValue,
    SourceLink,
    DateAdded,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::ProjectName => "project_name",
            SortField::Location => "location",
            SortField::ProjectType => "project_type",
            SortField::Stage => "stage",
            SortField::Stakeholders => "stakeholders",
            SortField::ProjectValue => "project_value",
            SortField::SourceLink => "source_link",
            SortField::DateAdded => "date_added",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "project_name" | "name" => Ok(SortField::ProjectName),
            "location" => Ok(SortField::Location),
            "project_type" | "type" => Ok(SortField::ProjectType),
            "stage" => Ok(SortField::Stage),
            "stakeholders" => Ok(SortField::Stakeholders),
            "project_value" | "value" => Ok(SortField::ProjectValue),
            "source_link" | "source" => Ok(SortField::SourceLink),
            "date_added" | "date" => Ok(SortField::DateAdded),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(format!("unknown sort direction: {}", s))
        }
    }
}

/// Every user-adjustable table control at a point in time.
///
/// Empty filter strings mean "no filter". `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub filter_stage: String,
    pub filter_type: String,
    pub filter_source: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter_stage: String::new(),
            filter_type: String::new(),
            filter_source: String::new(),
            sort_field: SortField::DateAdded,
            sort_direction: SortDirection::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.filter_stage.is_empty()
            || !self.filter_type.is_empty()
            || !self.filter_source.is_empty()
    }
}

/// Unique values offered by the filter selects, each sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub stages: Vec<String>,
    pub types: Vec<String>,
    pub sources: Vec<String>,
}

/// One rendered page of the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View<'a> {
    pub rows: Vec<&'a Project>,
    pub total_pages: usize,
    pub filtered_count: usize,
}
