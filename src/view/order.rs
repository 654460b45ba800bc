use std::cmp::Ordering;

use crate::project::{is_blank, parse_date, Project, TextField};

use super::types::{SortDirection, SortField};

/// Comparable key for one record. `None` is a missing value.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i64),
    Text(String),
}

fn text_field(field: SortField) -> Option<TextField> {
    match field {
        SortField::Id => None,
        SortField::ProjectName => Some(TextField::ProjectName),
        SortField::Location => Some(TextField::Location),
        SortField::ProjectType => Some(TextField::ProjectType),
        SortField::Stage => Some(TextField::Stage),
        SortField::Stakeholders => Some(TextField::Stakeholders),
        SortField::ProjectValue => Some(TextField::ProjectValue),
        SortField::SourceLink => Some(TextField::SourceLink),
        SortField::DateAdded => Some(TextField::DateAdded),
    }
}

fn sort_key(project: &Project, field: SortField) -> Option<SortKey> {
    match field {
        SortField::Id => Some(SortKey::Text(project.id.to_string())),
        SortField::DateAdded => {
            parse_date(project.date_added.as_deref()).map(|dt| SortKey::Number(dt.timestamp_millis()))
        }
        _ => {
            let raw = text_field(field).and_then(|f| project.raw(f));
            if is_blank(raw) {
                None
            } else {
                raw.map(|v| SortKey::Text(v.to_lowercase()))
            }
        }
    }
}

/// Missing values sort after present ones in both directions; two missing values tie.
fn compare(a: &Option<SortKey>, b: &Option<SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
    }
}

/// Stable sort; ties keep input order
pub fn sort_projects<'a>(projects: Vec<&'a Project>, field: SortField, direction: SortDirection) -> Vec<&'a Project> {
    let mut keyed: Vec<(Option<SortKey>, &'a Project)> =
        projects.into_iter().map(|p| (sort_key(p, field), p)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, direction));
    keyed.into_iter().map(|(_, p)| p).collect()
}
