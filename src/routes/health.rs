// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use planner_core::constants::service_names;
use planner_intelligence::DrillCatalog;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::PLANNER_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the catalog has drills to plan from
    async fn handle_ready() -> Json<Value> {
        let drills = DrillCatalog::builtin().len();
        let status = if drills > 0 { "ready" } else { "not_ready" };
        Json(json!({
            "status": status,
            "catalog_drills": drills,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
