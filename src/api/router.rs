use std::path::Path;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::convert;
use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, security_headers_middleware, ApiPaths,
    MAX_BODY_SIZE,
};
use super::state::AppState;
use crate::config::AppConfig;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", convert::create_convert_router())
}

fn with_middleware(router: Router, api_paths: ApiPaths) -> Router {
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn_with_state(
            api_paths,
            security_headers_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Router with the JSON endpoints only
pub fn create_api_router(state: AppState) -> Router {
    with_middleware(api_routes().with_state(state), ApiPaths::default())
}

/// Full router: JSON endpoints, optional `/metrics`, and the static
/// frontend as fallback for every other path
pub fn create_router(
    state: AppState,
    config: &AppConfig,
    metrics: Option<PrometheusMetrics>,
) -> Router {
    let mut router = api_routes().with_state(state);

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m, &config.metrics.path));
    }

    let static_dir = Path::new(&config.server.static_dir);
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    with_middleware(
        router.fallback_service(frontend),
        ApiPaths::new(&config.metrics.path),
    )
}
