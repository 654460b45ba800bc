use std::collections::BTreeSet;

use crate::project::Project;

use super::types::FilterOptions;

/// Unique stage, type and source values across all projects, independent of
/// the current filters. Blank values show up as the sentinel.
pub fn filter_options(projects: &[Project]) -> FilterOptions {
    let mut stages = BTreeSet::new();
    let mut types = BTreeSet::new();
    let mut sources = BTreeSet::new();

    for project in projects {
        stages.insert(project.stage_text());
        types.insert(project.type_text());
        sources.insert(project.source_type().label());
    }

    FilterOptions {
        stages: stages.into_iter().map(String::from).collect(),
        types: types.into_iter().map(String::from).collect(),
        sources: sources.into_iter().map(String::from).collect(),
    }
}
