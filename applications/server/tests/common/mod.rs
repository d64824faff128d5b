/// Common test utilities and fixtures
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sonora_server::{create_router, services::CatalogService, state::AppState};
use sonora_storage::SqliteCatalog;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router wired to a fresh on-disk database
pub struct TestApp {
    pub router: Router,
    pub catalog: SqliteCatalog,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
pub async fn create_test_app() -> Result<TestApp> {
    let temp_dir = TempDir::new()?;
    let url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let catalog = sonora_storage::open(&url, 5).await?;

    let service = CatalogService::new(Arc::new(catalog.clone()));
    let router = create_router(AppState::new(Arc::new(service)));

    Ok(TestApp {
        router,
        catalog,
        _temp_dir: temp_dir,
    })
}

impl TestApp {
    /// POST a JSON body and decode the JSON response
    pub async fn post(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    /// POST an arbitrary (possibly malformed) body as JSON
    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn song(id: &str, title: &str) -> Value {
        json!({ "id": id, "title": title, "artist": "The Band", "album": "Live" })
    }

    pub fn user(id: &str, username: &str) -> Value {
        json!({ "id": id, "username": username, "email": format!("{username}@example.com") })
    }

    /// An upload of `chunks` transport-stream segments for `song_id`
    pub fn upload(song_id: &str, chunks: usize) -> Value {
        let ts: Vec<Value> = (0..chunks)
            .map(|i| {
                json!({
                    "id": format!("{song_id}/{i}.ts"),
                    "song_id": song_id,
                    "name": format!("{i}.ts"),
                    "data": "R0AA",
                })
            })
            .collect();

        json!({
            "user_id": "u1",
            "ts": ts,
            "m3h8": {
                "id": format!("{song_id}/index.m3u8"),
                "song_id": song_id,
                "name": "index.m3u8",
                "data": "I0VYVE0zVQ==",
            },
            "song_data": song(song_id, "Intro"),
        })
    }
}
