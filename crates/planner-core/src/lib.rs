// ABOUTME: Core types and constants for the pickleball practice planner
// ABOUTME: Foundation crate with domain models, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types for the pickleball practice
//! planner. The plan generation engine and the HTTP server both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Accepted profile values and service names
//! - **models**: Skill areas, goals, catalog drills, plan input and output

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SkillArea`, `Drill`, `PlanInput`, `Plan`, ...)
pub mod models;
