// ABOUTME: Route module organization for the planner HTTP endpoints
// ABOUTME: Each domain module owns its route definitions and thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes for the pickleball planner

/// Drill catalog listing and wizard options
pub mod catalog;
/// Health check and readiness routes
pub mod health;
/// Weekly plan generation
pub mod plan;

pub use catalog::{CatalogRoutes, PlanOptions};
pub use health::HealthRoutes;
pub use plan::{PlanResponse, PlanRoutes};
