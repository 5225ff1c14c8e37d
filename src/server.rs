// ABOUTME: HTTP server assembly: merges routes, applies middleware layers, serves with graceful shutdown
// ABOUTME: The router is built separately so tests can drive it without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server bootstrap

use anyhow::{Context, Result};
use axum::Router;
use planner_intelligence::PlanGenerator;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::middleware::{make_request_span, request_id_header, setup_cors, PlannerRequestId};
use crate::routes::{CatalogRoutes, HealthRoutes, PlanRoutes};

/// Build the full application router with middleware
///
/// Layer order, outermost first: request ID assignment, tracing span,
/// timeout, CORS, request ID echo on the response.
#[must_use]
pub fn build_router(config: &ServerConfig, generator: PlanGenerator<'static>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PlanRoutes::routes(generator))
        .merge(CatalogRoutes::routes(generator.catalog()))
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(setup_cors(&config.cors))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::new(request_id_header(), PlannerRequestId))
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(config: &ServerConfig, generator: PlanGenerator<'static>) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    info!(%addr, drills = generator.catalog().len(), "HTTP server listening");

    axum::serve(listener, build_router(config, generator))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
