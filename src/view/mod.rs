//! Client-side table view-model: search, filter, sort and paginate a project list.
//!
//! Everything here is a pure function of its inputs. Blank fields are treated as
//! "Not specified" throughout.

pub mod filter;
pub mod options;
pub mod order;
pub mod page;
pub mod state;
pub mod types;

pub use filter::matches;
pub use options::filter_options;
pub use state::{clamp_page, reduce, Action};
pub use types::*;

use crate::project::Project;

/// Filtered and sorted rows, before pagination. This is what export consumes.
pub fn filtered_sorted<'a>(projects: &'a [Project], state: &ViewState) -> Vec<&'a Project> {
    let filtered = filter::apply(projects, state);
    order::sort_projects(filtered, state.sort_field, state.sort_direction)
}

/// Derive the rows to display for the given controls.
///
/// `state.page` is used as-is; callers clamp it with [`clamp_page`].
pub fn derive_view<'a>(projects: &'a [Project], state: &ViewState) -> View<'a> {
    let sorted = filtered_sorted(projects, state);
    let filtered_count = sorted.len();
    View {
        rows: page::paginate(&sorted, state.page, state.page_size),
        total_pages: page::total_pages(filtered_count, state.page_size),
        filtered_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(count: i64) -> Vec<Project> {
        (1..=count)
            .map(|id| Project {
                id,
                project_name: Some(format!("Project {:03}", id)),
                stage: Some(if id % 2 == 0 { "Approved" } else { "Proposed" }.to_string()),
                stakeholders: if id == 7 { Some("Acme, \"Bob\" Co".into()) } else { None },
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn sixty_rows_page_three_has_last_ten() {
        let projects = fixture(60);
        let state = ViewState {
            sort_field: SortField::ProjectName,
            sort_direction: SortDirection::Asc,
            page: 3,
            page_size: 25,
            ..Default::default()
        };
        let view = derive_view(&projects, &state);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_count, 60);
        let ids: Vec<i64> = view.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, (51..=60).collect::<Vec<_>>());
    }

    #[test]
    fn derive_view_is_pure() {
        let projects = fixture(30);
        let state = ViewState { search: "project 01".into(), ..Default::default() };
        assert_eq!(derive_view(&projects, &state), derive_view(&projects, &state));
    }

    #[test]
    fn rows_are_an_ordered_subsequence_of_filtered_input() {
        let projects = fixture(40);
        let state = ViewState {
            filter_stage: "Approved".into(),
            sort_field: SortField::ProjectName,
            sort_direction: SortDirection::Desc,
            page_size: 100,
            ..Default::default()
        };
        let view = derive_view(&projects, &state);
        assert!(view.rows.iter().all(|p| matches(p, &state)));
        assert_eq!(view.filtered_count, projects.iter().filter(|p| matches(p, &state)).count());
        let names: Vec<&str> = view.rows.iter().filter_map(|p| p.project_name.as_deref()).collect();
        let mut expected = names.clone();
        expected.sort_by(|a, b| b.to_lowercase().cmp(&a.to_lowercase()));
        assert_eq!(names, expected);
    }

    #[test]
    fn stage_filter_only_narrows() {
        let projects = fixture(20);
        let base = ViewState::default();
        let unfiltered = derive_view(&projects, &base).filtered_count;
        for stage in ["Approved", "Proposed", "Not specified", "Bogus"] {
            let narrowed = ViewState { filter_stage: stage.into(), ..base.clone() };
            assert!(derive_view(&projects, &narrowed).filtered_count <= unfiltered);
        }
    }

    #[test]
    fn search_finds_stakeholder_only_match() {
        let projects = fixture(10);
        let state = ViewState { search: "acme".into(), ..Default::default() };
        let view = derive_view(&projects, &state);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, 7);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let projects = fixture(5);
        let state = ViewState { search: "nothing matches this".into(), ..Default::default() };
        let view = derive_view(&projects, &state);
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
    }
}
