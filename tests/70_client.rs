mod common;

use anyhow::Result;
use chrono::NaiveDate;

use project_dashboard::auth::{AuthStatus, Gate};
use project_dashboard::dashboard::DashboardSession;
use project_dashboard::export::ExportFormat;
use project_dashboard::source::{FailingProjectSource, FetchError, HttpProjectSource, ProjectSource};
use project_dashboard::view::{Action, SortDirection, SortField};

#[tokio::test]
async fn http_source_fetches_project_list() -> Result<()> {
    let server = common::serve(common::router()).await?;
    let source = HttpProjectSource::new(&server.base_url, Some(common::token("user-1", Some("Dana"))));

    assert_eq!(source.whoami().await, Ok("Dana".to_string()));
    assert_eq!(source.fetch_projects().await, Ok(common::fixture()));
    Ok(())
}

#[tokio::test]
async fn http_source_maps_rejected_token_to_unauthorized() -> Result<()> {
    let server = common::serve(common::router()).await?;
    let source = HttpProjectSource::new(&server.base_url, Some("not-a-jwt".to_string()));

    assert_eq!(source.fetch_projects().await, Err(FetchError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn http_source_surfaces_server_error_message() -> Result<()> {
    let failing = FailingProjectSource::new(FetchError::data_unavailable("database is down"));
    let server = common::serve(common::router_with(failing)).await?;
    let source = HttpProjectSource::new(&server.base_url, Some(common::token("user-1", None)));

    assert_eq!(
        source.fetch_projects().await,
        Err(FetchError::DataUnavailable("database is down".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_data_unavailable() -> Result<()> {
    let port = portpicker::pick_unused_port().expect("free port");
    let source = HttpProjectSource::new(format!("http://127.0.0.1:{}", port), Some(common::token("u", None)));

    assert!(matches!(source.fetch_projects().await, Err(FetchError::DataUnavailable(_))));
    Ok(())
}

#[tokio::test]
async fn session_drives_view_and_export_end_to_end() -> Result<()> {
    let server = common::serve(common::router()).await?;
    let source = HttpProjectSource::new(&server.base_url, Some(common::token("user-1", Some("Dana"))));
    let name = source.whoami().await?;
    let mut session = DashboardSession::new(AuthStatus::SignedIn { display_name: Some(name) });
    assert_eq!(session.gate(), Gate::Dashboard);

    assert!(session.refresh(&source).await);
    session.dispatch(Action::SetSort(SortField::DateAdded, SortDirection::Desc));
    session.dispatch(Action::SetPageSize(2));

    let view = session.view().expect("data loaded");
    assert_eq!(view.total_pages, 2);
    let ids: Vec<i64> = view.rows.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);

    let today = NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date");
    let export = session.export(ExportFormat::Csv, "projects", today).expect("rows to export")?;
    let lines: Vec<String> = String::from_utf8(export.bytes)?.lines().map(String::from).collect();
    assert_eq!(lines.len(), 4, "export ignores pagination");
    assert!(lines[3].starts_with("2,"), "blank date exported last");
    Ok(())
}

#[tokio::test]
async fn signed_out_session_never_fetches() -> Result<()> {
    let mut session = DashboardSession::new(AuthStatus::SignedOut);
    let source = FailingProjectSource::new(FetchError::data_unavailable("should not be called"));

    assert_eq!(session.gate(), Gate::SignIn);
    assert!(!session.refresh(&source).await);
    assert!(session.error().is_none());
    Ok(())
}
