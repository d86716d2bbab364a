#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use server::{routes, startup, ServerState};

/// Router over a freshly migrated SQLite file, removed on drop.
pub struct TestApp {
    pub router: Router,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub async fn build_app() -> anyhow::Result<TestApp> {
    let path = std::env::temp_dir().join(format!("refill-server-{}.sqlite", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    let db = models::db::connect_and_migrate(&cfg).await?;
    let router = routes::build_router(ServerState::new(db), startup::build_cors());
    Ok(TestApp { router, path })
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send_request(req).await
    }

    pub async fn send_request(&self, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let resp = self.router.clone().oneshot(req).await?;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, value))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.send("POST", uri, Some(body)).await
    }
}
