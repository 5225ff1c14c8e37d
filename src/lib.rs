// ABOUTME: Main library entry point for the pickleball practice planner service
// ABOUTME: Wires request validation, HTTP routes, configuration, and logging around the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pickleball Planner
//!
//! Generates a weekly practice plan from a player profile: DUPR rating,
//! weakness areas, session length, days per week, goal, and youth flag. The
//! same profile always yields the same plan.
//!
//! ## Crates
//!
//! - `planner-core`: models, errors, constants
//! - `planner-intelligence`: the plan engine
//! - this crate: request boundary, HTTP API, server and CLI support
//!
//! ## Quick Start
//!
//! ```bash
//! pickleball-planner-server --http-port 8081
//! curl -s localhost:8081/api/generate-plan -H 'content-type: application/json' \
//!   -d '{"rating":3.5,"weaknesses":["dinking","drops"],"timePerSession":60,"daysPerWeek":3}'
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server loop
pub mod server;

/// Plan request validation
pub mod validation;

pub use planner_core::{errors, models};
pub use planner_intelligence::{generate_plan, DrillCatalog, PlanGenerator};
