pub mod export;
pub mod token;
pub mod view;

use clap::Args;

use crate::auth::{AuthStatus, Gate};
use crate::cli::Connection;
use crate::dashboard::DashboardSession;
use crate::source::{FetchError, HttpProjectSource};
use crate::view::{Action, SortDirection, SortField};

/// Table controls shared by `view` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    #[arg(long, help = "Case-insensitive search across all fields")]
    pub search: Option<String>,

    #[arg(long, help = "Only this stage (use \"Not specified\" for blanks)")]
    pub stage: Option<String>,

    #[arg(long = "type", help = "Only this project type")]
    pub project_type: Option<String>,

    #[arg(long, help = "Only this source type: PDF, Texas, Website, Not specified")]
    pub source: Option<String>,

    #[arg(long, help = "Sort column, e.g. date_added, project_name, stage")]
    pub sort: Option<SortField>,

    #[arg(long, conflicts_with = "desc", help = "Sort ascending")]
    pub asc: bool,

    #[arg(long, help = "Sort descending")]
    pub desc: bool,

    #[arg(long, help = "Page number (1-based)")]
    pub page: Option<usize>,

    #[arg(long, help = "Rows per page")]
    pub page_size: Option<usize>,
}

impl TableArgs {
    /// The interactions these flags stand for, in the order a user would make them
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(search) = &self.search {
            actions.push(Action::SetSearch(search.clone()));
        }
        if let Some(stage) = &self.stage {
            actions.push(Action::SetStageFilter(stage.clone()));
        }
        if let Some(project_type) = &self.project_type {
            actions.push(Action::SetTypeFilter(project_type.clone()));
        }
        if let Some(source) = &self.source {
            actions.push(Action::SetSourceFilter(source.clone()));
        }

        let direction = if self.asc {
            Some(SortDirection::Asc)
        } else if self.desc {
            Some(SortDirection::Desc)
        } else {
            None
        };
        match (self.sort, direction) {
            (Some(field), Some(direction)) => actions.push(Action::SetSort(field, direction)),
            (Some(field), None) => actions.push(Action::SetSort(field, SortDirection::Asc)),
            (None, Some(direction)) => {
                actions.push(Action::SetSort(crate::view::ViewState::default().sort_field, direction))
            }
            (None, None) => {}
        }

        if let Some(size) = self.page_size {
            actions.push(Action::SetPageSize(size));
        }
        if let Some(page) = self.page {
            actions.push(Action::SetPage(page));
        }
        actions
    }
}

/// Sign in, load the project list and apply the table flags.
///
/// Returns `None` when the user is signed out; the sign-in prompt has already
/// been printed.
pub async fn open_session(connection: &Connection, table: &TableArgs) -> anyhow::Result<Option<DashboardSession>> {
    let source = HttpProjectSource::new(&connection.server, connection.token.clone());

    let auth = if !source.has_token() {
        AuthStatus::SignedOut
    } else {
        match source.whoami().await {
            Ok(name) => AuthStatus::SignedIn { display_name: Some(name) },
            Err(FetchError::Unauthorized) => AuthStatus::SignedOut,
            // Let the project fetch report the outage
            Err(FetchError::DataUnavailable(_)) => AuthStatus::SignedIn { display_name: None },
        }
    };

    let mut session = DashboardSession::new(auth);
    if session.gate() == Gate::SignIn {
        print_sign_in_prompt();
        return Ok(None);
    }

    session.refresh(&source).await;
    match session.error() {
        Some(FetchError::Unauthorized) => {
            print_sign_in_prompt();
            return Ok(None);
        }
        Some(FetchError::DataUnavailable(message)) if session.view().is_none() => {
            anyhow::bail!("Projects are unavailable: {} (run the command again to retry)", message);
        }
        _ => {}
    }

    for action in table.actions() {
        session.dispatch(action);
    }
    Ok(Some(session))
}

fn print_sign_in_prompt() {
    eprintln!("Not signed in. Pass a token with --token or set DASH_TOKEN, then try again.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_without_direction_is_ascending() {
        let args = TableArgs { sort: Some(SortField::Stage), ..Default::default() };
        assert_eq!(args.actions(), vec![Action::SetSort(SortField::Stage, SortDirection::Asc)]);
    }

    #[test]
    fn page_is_applied_after_filters() {
        let args = TableArgs {
            search: Some("acme".into()),
            page: Some(3),
            page_size: Some(10),
            ..Default::default()
        };
        let actions = args.actions();
        assert_eq!(actions.first(), Some(&Action::SetSearch("acme".into())));
        assert_eq!(actions.last(), Some(&Action::SetPage(3)));
    }

    #[test]
    fn direction_alone_keeps_default_column() {
        let args = TableArgs { asc: true, ..Default::default() };
        assert_eq!(args.actions(), vec![Action::SetSort(SortField::DateAdded, SortDirection::Asc)]);
    }
}
