use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use predictimmo::{
    config::Mode,
    model::{self, ModelHandle},
    server::{self, AppState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use super::MockRegressor;

/// Linear model used by the HTTP tests.
///
/// appartment, 50 m², 3 rooms: 20000 + 0 + 50 * 2500.75 + 3 * 4000 = 157037.5
pub const SAMPLE_MODEL_JSON: &str = r#"{
    "name": "sample-dvf",
    "intercept": [20000.0],
    "features": [
        {
            "name": "type_local",
            "kind": "categorical",
            "categories": { "Maison": [30000.0], "Appartement": [0.0] }
        },
        { "name": "surface_reelle_bati", "kind": "numeric", "coefficients": [2500.75] },
        { "name": "nombre_pieces_principales", "kind": "numeric", "coefficients": [4000.0] }
    ]
}"#;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write the sample artifact and load it through the real loader
pub async fn load_sample_model() -> (ModelHandle, TempDir) {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("model.json");
    tokio::fs::write(&path, SAMPLE_MODEL_JSON).await.unwrap();

    let model = model::load(&path).await.unwrap();
    (model, temp_dir)
}

pub async fn create_test_app() -> (Router, TempDir) {
    let (model, temp_dir) = load_sample_model().await;
    (server::router(AppState::new(model, Mode::Testing)), temp_dir)
}

pub fn create_mock_app(mock: MockRegressor, mode: Mode) -> Router {
    server::router(AppState::new(Arc::new(mock), mode))
}

pub fn get_index() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, String) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    (Response::from_parts(parts, Body::empty()), text)
}

/// Pull the integer out of `<p id="estimated_value">... €</p>`
pub fn extract_estimate(body: &str) -> Option<i64> {
    let start = body.find(r#"id="estimated_value">"#)? + r#"id="estimated_value">"#.len();
    let rest = &body[start..];
    let end = rest.find(' ')?;
    rest[..end].parse().ok()
}
