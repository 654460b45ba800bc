use crate::project::Project;

use super::types::ViewState;

/// Search and select-filter predicate. All active conditions must hold.
pub fn matches(project: &Project, state: &ViewState) -> bool {
    passes(project, state, &search_needle(state))
}

fn search_needle(state: &ViewState) -> String {
    state.search.to_lowercase()
}

fn passes(project: &Project, state: &ViewState, needle: &str) -> bool {
    matches_search(project, needle)
        && matches_select(&state.filter_stage, project.stage_text())
        && matches_select(&state.filter_type, project.type_text())
        && matches_select(&state.filter_source, project.source_type().label())
}

/// `needle` must already be lowercased
fn matches_search(project: &Project, needle: &str) -> bool {
    needle.is_empty() || project.search_text().contains(needle)
}

fn matches_select(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected == value
}

/// Projects passing the predicate, in input order
pub fn apply<'a>(projects: &'a [Project], state: &ViewState) -> Vec<&'a Project> {
    let needle = search_needle(state);
    projects.iter().filter(|p| passes(p, state, &needle)).collect()
}
