//! Dashboard session: owns the auth status, the loaded project list and the
//! table controls, and decides what the user can do at any moment.
//!
//! Fetches follow stale-while-revalidate: a refresh keeps the current rows on
//! screen, replaces rows and filter options together on success, and on
//! failure keeps the old rows and reports the error separately. A refresh
//! requested while another fetch is in flight is ignored.

use chrono::NaiveDate;

use crate::auth::{AuthStatus, Gate};
use crate::export::{self, Export, ExportError, ExportFormat};
use crate::project::Project;
use crate::source::{FetchError, ProjectSource};
use crate::view::{self, clamp_page, filter_options, reduce, Action, FilterOptions, View, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing fetched yet
    Idle,
    /// First fetch in flight; there are no rows to show
    Loading,
    Ready {
        projects: Vec<Project>,
        options: FilterOptions,
    },
}

/// Proof that a fetch was started; hand it back with the result
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    refresh: bool,
}

#[derive(Debug)]
pub struct DashboardSession {
    auth: AuthStatus,
    state: ViewState,
    load: LoadState,
    in_flight: bool,
    error: Option<FetchError>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(AuthStatus::Loading)
    }
}

impl DashboardSession {
    pub fn new(auth: AuthStatus) -> Self {
        Self {
            auth,
            state: ViewState::default(),
            load: LoadState::Idle,
            in_flight: false,
            error: None,
        }
    }

    pub fn auth(&self) -> &AuthStatus {
        &self.auth
    }

    pub fn set_auth(&mut self, auth: AuthStatus) {
        self.auth = auth;
    }

    pub fn gate(&self) -> Gate {
        self.auth.gate()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// A refresh is running while older rows stay visible
    pub fn is_refreshing(&self) -> bool {
        self.in_flight && matches!(self.load, LoadState::Ready { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn projects(&self) -> &[Project] {
        match &self.load {
            LoadState::Ready { projects, .. } => projects,
            _ => &[],
        }
    }

    pub fn options(&self) -> Option<&FilterOptions> {
        match &self.load {
            LoadState::Ready { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Start a fetch. Returns `None` when one is already in flight or the
    /// user is not signed in.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight {
            tracing::debug!("Ignoring refresh while a fetch is in flight");
            return None;
        }
        if !self.auth.is_signed_in() {
            return None;
        }

        self.in_flight = true;
        let refresh = matches!(self.load, LoadState::Ready { .. });
        if !refresh {
            self.load = LoadState::Loading;
        }
        Some(FetchTicket { refresh })
    }

    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Project>, FetchError>) {
        self.in_flight = false;
        match result {
            Ok(projects) => {
                let options = filter_options(&projects);
                tracing::debug!(refresh = ticket.refresh, "Loaded {} projects", projects.len());
                self.load = LoadState::Ready { projects, options };
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(refresh = ticket.refresh, "Project fetch failed: {}", err);
                if matches!(self.load, LoadState::Loading) {
                    self.load = LoadState::Idle;
                }
                if err == FetchError::Unauthorized {
                    self.auth = AuthStatus::SignedOut;
                }
                self.error = Some(err);
            }
        }
    }

    /// Fetch (or refresh) from `source`. Returns `false` if the request was ignored.
    pub async fn refresh(&mut self, source: &dyn ProjectSource) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let result = source.fetch_projects().await;
        self.finish_fetch(ticket, result);
        true
    }

    /// Apply a table interaction. Ignored until there is data to operate on.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !matches!(self.load, LoadState::Ready { .. }) {
            return false;
        }
        self.state = reduce(&self.state, action);
        true
    }

    /// Current page with the requested page clamped into range, or `None`
    /// while no data is loaded.
    pub fn view(&self) -> Option<View<'_>> {
        let LoadState::Ready { projects, .. } = &self.load else {
            return None;
        };
        let filtered = view::filtered_sorted(projects, &self.state).len();
        let total_pages = view::page::total_pages(filtered, self.state.page_size);
        let state = ViewState {
            page: clamp_page(self.state.page, total_pages),
            ..self.state.clone()
        };
        Some(view::derive_view(projects, &state))
    }

    /// Current page number after clamping
    pub fn current_page(&self) -> usize {
        self.view()
            .map(|v| clamp_page(self.state.page, v.total_pages))
            .unwrap_or(1)
    }

    /// Export every filtered and sorted row (not just the current page).
    /// `None` when there is nothing to export.
    pub fn export(
        &self,
        format: ExportFormat,
        base: &str,
        today: NaiveDate,
    ) -> Option<Result<Export, ExportError>> {
        let rows = view::filtered_sorted(self.projects(), &self.state);
        if rows.is_empty() {
            return None;
        }
        Some(export::serialize(&rows, format, base, today))
    }
}
