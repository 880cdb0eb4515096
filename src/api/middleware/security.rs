//! Security headers and request limits

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::config::MetricsConfig;

/// Conversion requests are a few dozen bytes; anything near this is abuse
pub const MAX_BODY_SIZE: usize = 16 * 1024;

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

const PAGE_CSP: &str = "default-src 'self'; \
     script-src 'self'; \
     style-src 'self'; \
     connect-src 'self'; \
     img-src 'self' data:; \
     frame-ancestors 'none'";

const HANDLER_PREFIXES: [&str; 4] = ["/api", "/health", "/ready", "/live"];

/// Paths served by handlers rather than the static frontend
#[derive(Debug, Clone)]
pub struct ApiPaths {
    metrics_path: Arc<str>,
}

impl ApiPaths {
    pub fn new(metrics_path: &str) -> Self {
        Self {
            metrics_path: Arc::from(metrics_path),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        HANDLER_PREFIXES
            .iter()
            .copied()
            .chain(std::iter::once(&*self.metrics_path))
            .any(|prefix| {
                path.strip_prefix(prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }
}

impl Default for ApiPaths {
    fn default() -> Self {
        Self::new(&MetricsConfig::default().path)
    }
}

/// Add security headers to all responses
pub async fn security_headers_middleware(
    State(api_paths): State<ApiPaths>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let is_api = api_paths.contains(request.uri().path());
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    let csp = if is_api { API_CSP } else { PAGE_CSP };
    headers.insert(header::CONTENT_SECURITY_POLICY, HeaderValue::from_static(csp));

    if is_api && !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_paths() {
        let paths = ApiPaths::default();

        assert!(paths.contains("/api/convert/length"));
        assert!(paths.contains("/api"));
        assert!(paths.contains("/health"));
        assert!(paths.contains("/metrics"));
        assert!(!paths.contains("/"));
        assert!(!paths.contains("/index.html"));
        assert!(!paths.contains("/apidocs.html"));
    }

    #[test]
    fn test_configured_metrics_path() {
        let paths = ApiPaths::new("/internal/metrics");

        assert!(paths.contains("/internal/metrics"));
        assert!(!paths.contains("/internal/metricsx"));
        assert!(!paths.contains("/metrics"));
        assert!(paths.contains("/ready"));
    }

    #[test]
    fn test_max_body_size() {
        assert_eq!(MAX_BODY_SIZE, 16 * 1024);
    }
}
