//! Health check endpoints

use std::time::Instant;

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::conversion::convert;
use crate::domain::UnitCategory;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns 200 while the process is serving requests
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Runs one known conversion per category against the converters.
/// Bypasses the conversion service so probes stay out of `conversions_total`.
pub async fn ready_check() -> impl IntoResponse {
    let start = Instant::now();

    let checks: Vec<HealthCheck> = UnitCategory::ALL
        .iter()
        .map(|category| check_category(*category))
        .collect();

    let overall = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    let response = HealthResponse {
        status: overall,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Known `(value, from, to, expected)` per category
fn probe(category: UnitCategory) -> (f64, &'static str, &'static str, f64) {
    match category {
        UnitCategory::Length => (1.0, "km", "m", 1000.0),
        UnitCategory::Weight => (1.0, "kg", "g", 1000.0),
        UnitCategory::Temperature => (100.0, "c", "f", 212.0),
    }
}

fn check_category(category: UnitCategory) -> HealthCheck {
    let (value, from, to, expected) = probe(category);

    let (status, message) = match convert(category, value, from, to) {
        Ok(result) if (result - expected).abs() < 1e-6 => (HealthStatus::Healthy, None),
        Ok(result) => (
            HealthStatus::Unhealthy,
            Some(format!("expected {}, got {}", expected, result)),
        ),
        Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
    };

    HealthCheck {
        name: format!("{}_conversion", category),
        status,
        message,
    }
}
