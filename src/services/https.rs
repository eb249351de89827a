//! HTTPS service
//!
//! Assembles the Axum router: API routes, static assets and the
//! middleware stack (CORS, compression, access log).

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::core::ServerState;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::empleados::router())
}

/// Assemble the full application
///
/// Static files from `config.static_dir` are the fallback, so `/`
/// serves `index.html` and any unmatched path is looked up on disk.
pub fn build_router(state: ServerState) -> Router {
    let static_dir = state.config.static_dir.clone();

    build_app()
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
