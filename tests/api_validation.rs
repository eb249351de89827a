//! Router-level tests for everything that does not need a live MySQL:
//! validation failures, static assets, path rejection and the health
//! endpoint shape.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use empresa_server::core::Config;
use empresa_server::core::ServerState;
use empresa_server::db::DbService;
use empresa_server::services::https::build_router;

fn test_app(static_dir: &str) -> Router {
    let config = Config::with_overrides(static_dir, 0);
    let db = DbService::connect_lazy(&config);
    build_router(ServerState::new(config, db.pool))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = test_app("static");

    let request = json_request("POST", "/empleados", json!({"nombre": "Ana"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Todos los campos son obligatorios");
}

#[tokio::test]
async fn create_rejects_zero_salary() {
    let app = test_app("static");

    let request = json_request(
        "POST",
        "/empleados",
        json!({"nombre": "Ana", "puesto": "Gerente", "salario": 0}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Todos los campos son obligatorios");
}

#[tokio::test]
async fn create_rejects_empty_strings() {
    let app = test_app("static");

    let request = json_request(
        "POST",
        "/empleados",
        json!({"nombre": "", "puesto": "Gerente", "salario": 1500}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_rejects_missing_fields() {
    let app = test_app("static");

    let request = json_request("PUT", "/empleados/1", json!({"puesto": "Gerente"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Todos los campos son obligatorios");
}

#[tokio::test]
async fn bulk_create_rejects_non_array_body() {
    let app = test_app("static");

    let request = json_request(
        "POST",
        "/empleados/masivo",
        json!({"nombre": "Ana", "puesto": "Gerente", "salario": 1500}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Debe enviar un array de empleados válido.");
}

#[tokio::test]
async fn bulk_create_rejects_empty_array() {
    let app = test_app("static");

    let request = json_request("POST", "/empleados/masivo", json!([]));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Debe enviar un array de empleados válido.");
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = test_app("static");

    let request = Request::builder()
        .method("GET")
        .uri("/empleados/abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn root_serves_the_entry_page() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body>Empresa API</body></html>",
    )
    .unwrap();

    let app = test_app(dir.path().to_str().unwrap());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Empresa API"));
}

#[tokio::test]
async fn unknown_static_path_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path().to_str().unwrap());

    let request = Request::builder()
        .method("GET")
        .uri("/no-existe.html")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_service_status() {
    let app = test_app("static");

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    // No MySQL is provisioned for these tests, so the round-trip result
    // only has to be one of the two reportable states.
    assert!(body["database"] == "ok" || body["database"] == "error");
}

#[tokio::test]
async fn cors_is_permissive() {
    let app = test_app("static");

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
