use super::types::{SortDirection, SortField, ViewState};

/// A single user interaction with the table controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearch(String),
    SetStageFilter(String),
    SetTypeFilter(String),
    SetSourceFilter(String),
    ClearFilters,
    /// Column header click: same column flips direction, new column starts ascending
    SortBy(SortField),
    SetSort(SortField, SortDirection),
    SetPage(usize),
    NextPage,
    PrevPage,
    SetPageSize(usize),
}

/// Apply an action, producing the next view state.
///
/// Anything that changes which rows are visible or how many fit on a page sends
/// the user back to page 1. `NextPage` is not bounded here: the caller clamps
/// against the page count it got from the engine.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::SetSearch(search) => {
            next.search = search;
            next.page = 1;
        }
        Action::SetStageFilter(stage) => {
            next.filter_stage = stage;
            next.page = 1;
        }
        Action::SetTypeFilter(project_type) => {
            next.filter_type = project_type;
            next.page = 1;
        }
        Action::SetSourceFilter(source) => {
            next.filter_source = source;
            next.page = 1;
        }
        Action::ClearFilters => {
            next.search.clear();
            next.filter_stage.clear();
            next.filter_type.clear();
            next.filter_source.clear();
            next.page = 1;
        }
        Action::SortBy(field) => {
            if next.sort_field == field {
                next.sort_direction = next.sort_direction.toggled();
            } else {
                next.sort_field = field;
                next.sort_direction = SortDirection::Asc;
            }
            next.page = 1;
        }
        Action::SetSort(field, direction) => {
            next.sort_field = field;
            next.sort_direction = direction;
            next.page = 1;
        }
        Action::SetPage(page) => next.page = page.max(1),
        Action::NextPage => next.page = next.page.saturating_add(1),
        Action::PrevPage => next.page = next.page.saturating_sub(1).max(1),
        Action::SetPageSize(size) => {
            next.page_size = size.max(1);
            next.page = 1;
        }
    }
    next
}

/// Caller-side clamp of a requested page into `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_page() {
        let state = ViewState { page: 4, ..Default::default() };
        let next = reduce(&state, Action::SetSearch("acme".into()));
        assert_eq!(next.search, "acme");
        assert_eq!(next.page, 1);
        assert_eq!(state.page, 4, "input state is untouched");
    }

    #[test]
    fn clear_filters_keeps_sort_and_page_size() {
        let state = ViewState {
            search: "x".into(),
            filter_stage: "Approved".into(),
            filter_type: "Retail".into(),
            filter_source: "PDF".into(),
            sort_field: SortField::Location,
            sort_direction: SortDirection::Asc,
            page: 3,
            page_size: 50,
        };
        let next = reduce(&state, Action::ClearFilters);
        assert!(!next.has_active_filters());
        assert_eq!(next.sort_field, SortField::Location);
        assert_eq!(next.sort_direction, SortDirection::Asc);
        assert_eq!(next.page_size, 50);
        assert_eq!(next.page, 1);
    }

    #[test]
    fn sort_by_toggles_same_column_and_resets_new_column() {
        let state = ViewState::default();
        let toggled = reduce(&state, Action::SortBy(SortField::DateAdded));
        assert_eq!(toggled.sort_direction, SortDirection::Asc);

        let other = reduce(&state, Action::SortBy(SortField::Stage));
        assert_eq!(other.sort_field, SortField::Stage);
        assert_eq!(other.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn page_navigation_never_drops_below_one() {
        let state = ViewState::default();
        assert_eq!(reduce(&state, Action::PrevPage).page, 1);
        assert_eq!(reduce(&state, Action::SetPage(0)).page, 1);
        assert_eq!(reduce(&state, Action::NextPage).page, 2);
        assert_eq!(reduce(&state, Action::SetPageSize(0)).page_size, 1);
    }

    #[test]
    fn clamps_page_into_range() {
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
