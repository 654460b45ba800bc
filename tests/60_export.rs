mod common;

use anyhow::Result;
use chrono::NaiveDate;

use project_dashboard::export::{serialize, ExportFormat};
use project_dashboard::project::Project;
use project_dashboard::view::{filtered_sorted, SortDirection, SortField, ViewState};

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date")
}

#[test]
fn csv_quotes_stakeholders_with_commas_and_quotes() -> Result<()> {
    let projects = common::fixture();
    let rows: Vec<&Project> = projects.iter().collect();

    let export = serialize(&rows, ExportFormat::Csv, "projects", export_date())?;
    let text = String::from_utf8(export.bytes)?;

    assert_eq!(export.filename, "projects_2024-06-30.csv");
    assert_eq!(export.mime, "text/csv");
    assert!(text.starts_with("ID,Project Name,Location,Project Type,Stage,Stakeholders,Project Value,Source Link,Date Added\n"));
    let riverside = text.lines().find(|l| l.starts_with("2,")).expect("row for project 2");
    assert!(riverside.contains(r#","Acme, ""Bob"" Co","#), "row: {}", riverside);
    assert!(riverside.ends_with(r#","Not specified""#), "blank date: {}", riverside);
    Ok(())
}

#[test]
fn csv_follows_filtered_sorted_order_not_pagination() -> Result<()> {
    let projects: Vec<Project> = (1..=30)
        .map(|id| common::project(id, &format!("P{:02}", id), "Approved", "2024-01-01"))
        .collect();
    let state = ViewState {
        sort_field: SortField::ProjectName,
        sort_direction: SortDirection::Desc,
        page_size: 10,
        ..Default::default()
    };

    let rows = filtered_sorted(&projects, &state);
    let export = serialize(&rows, ExportFormat::Csv, "projects", export_date())?;
    let text = String::from_utf8(export.bytes)?;

    let ids: Vec<&str> = text.lines().skip(1).map(|l| l.split(',').next().unwrap_or("")).collect();
    assert_eq!(ids.len(), 30);
    assert_eq!(ids.first(), Some(&"30"));
    assert_eq!(ids.last(), Some(&"1"));
    Ok(())
}

#[test]
fn json_round_trips_exactly() -> Result<()> {
    let projects = common::fixture();
    let rows: Vec<&Project> = projects.iter().collect();

    let export = serialize(&rows, ExportFormat::Json, "projects", export_date())?;
    let back: Vec<Project> = serde_json::from_slice(&export.bytes)?;

    assert_eq!(export.filename, "projects_2024-06-30.json");
    assert_eq!(back, projects);
    Ok(())
}

#[test]
fn html_report_is_self_contained() -> Result<()> {
    let projects = common::fixture();
    let rows: Vec<&Project> = projects.iter().collect();

    let export = serialize(&rows, ExportFormat::Html, "projects", export_date())?;
    let html = String::from_utf8(export.bytes)?;

    assert_eq!(export.filename, "projects_report_2024-06-30.html");
    assert_eq!(export.mime, "text/html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("Total Projects: 3"));
    assert!(html.contains("class=\"stage-approved\">Approved<"));
    assert!(html.contains("class=\"stage-proposed\">Proposed<"));
    assert!(html.contains("class=\"stage-default\">In Planning<"));
    assert!(html.contains(">Texas</a>"));
    assert!(html.contains(">Website</a>"));
    assert!(html.contains("Acme, &quot;Bob&quot; Co"));
    Ok(())
}
