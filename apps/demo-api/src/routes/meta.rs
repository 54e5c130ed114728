//! Service information, health probe and deployment metadata.
//!
//! None of these touch the user store or the calculator.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::process::MemoryUsage;
use crate::state::AppState;

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "MCP CI/CD Demo API";

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds since startup.
    pub uptime: f64,
    /// `null` where the platform does not expose process memory.
    pub memory: Option<MemoryUsage>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeploymentResponse {
    pub environment: String,
    pub deployment_id: String,
    pub build_number: u64,
    pub deployed_at: DateTime<Utc>,
}

/// `GET /`
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        timestamp: Utc::now(),
    })
}

/// `GET /health`
///
/// The process has no dependencies to probe, so it always reports healthy
/// while it can answer at all.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: state.uptime().as_secs_f64(),
        memory: state.process.memory(),
        timestamp: Utc::now(),
    })
}

/// `GET /status/deployment`
pub async fn deployment(State(state): State<AppState>) -> Json<DeploymentResponse> {
    let config = &state.config;
    Json(DeploymentResponse {
        environment: config.environment.clone(),
        deployment_id: config.deployment_id.clone(),
        build_number: config.build_number,
        deployed_at: state.started_at(),
    })
}
