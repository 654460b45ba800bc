#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{body::Body, http::Request, Router};
use axum::http::StatusCode;
use tower::ServiceExt;

use project_dashboard::auth::{generate_jwt, Claims};
use project_dashboard::project::Project;
use project_dashboard::server::{app, AppState};
use project_dashboard::source::{ProjectSource, StaticProjectSource};

pub const SECRET: &str = "integration-test-secret";

pub fn token(sub: &str, name: Option<&str>) -> String {
    generate_jwt(&Claims::new(sub, name.map(String::from), 1), SECRET).expect("token")
}

pub fn project(id: i64, name: &str, stage: &str, date: &str) -> Project {
    Project {
        id,
        project_name: Some(name.to_string()),
        location: Some("Austin, TX".to_string()),
        project_type: Some("Commercial".to_string()),
        stage: Some(stage.to_string()),
        stakeholders: None,
        project_value: Some("$1.2M".to_string()),
        source_link: Some(format!("https://example.com/projects/{}", id)),
        date_added: Some(date.to_string()),
    }
}

pub fn fixture() -> Vec<Project> {
    let mut projects = vec![
        project(1, "Harbor Point", "Approved", "2024-01-05"),
        project(2, "Riverside Lofts", "Proposed", ""),
        project(3, "Cedar Clinic", "In Planning", "2024-03-01"),
    ];
    projects[1].stakeholders = Some("Acme, \"Bob\" Co".to_string());
    projects[2].source_link = Some("https://www.tdlr.texas.gov/TABS/Search/Project/TABS2024000123".to_string());
    projects
}

pub fn router_with(source: impl ProjectSource + 'static) -> Router {
    app(AppState::new(Arc::new(source), SECRET))
}

pub fn router() -> Router {
    router_with(StaticProjectSource::new(fixture()))
}

/// Issue a GET through the router without binding a socket
pub async fn get(router: &Router, path: &str, token: Option<&str>) -> Result<(StatusCode, serde_json::Value)> {
    let mut request = Request::builder().uri(path);
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {}", token));
    }
    let response = router.clone().oneshot(request.body(Body::empty())?).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response body is not JSON")?
    };
    Ok((status, body))
}

pub struct TestServer {
    pub base_url: String,
}

/// Serve `router` on a free local port for client-side tests
pub async fn serve(router: Router) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let base_url = format!("http://127.0.0.1:{}", port);
    wait_ready(&base_url, Duration::from_secs(5)).await?;
    Ok(TestServer { base_url })
}

async fn wait_ready(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if client.get(format!("{}/", base_url)).send().await.is_ok() {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    anyhow::bail!("server did not become ready on {} within {:?}", base_url, timeout)
}
