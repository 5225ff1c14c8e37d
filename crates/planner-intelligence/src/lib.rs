// ABOUTME: Practice plan generation engine for the pickleball planner
// ABOUTME: Seeded shuffle, drill catalog, time-budget allocation, day composition, plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! Turns a validated [`PlanInput`](planner_core::models::PlanInput) into a
//! weekly [`Plan`](planner_core::models::Plan). Everything here is pure and
//! synchronous; there is no real randomness, so the same profile always
//! produces the same plan.
//!
//! Leaf to root:
//!
//! - **shuffle**: 31-bit LCG driving a Fisher-Yates shuffle
//! - **catalog**: built-in drills and the eligibility filter
//! - **allocator**: fills a day's drill minutes across weakness areas
//! - **session**: warm-up and cool-down timing and routines
//! - **composer**: one practice day
//! - **assembler**: the full week, overview, and goal tip

/// Time-budget drill allocation
pub mod allocator;

/// Weekly plan assembly
pub mod assembler;

/// Drill catalog and eligibility filter
pub mod catalog;

/// Single-day composition
pub mod composer;

/// Warm-up and cool-down lookups
pub mod session;

/// Deterministic shuffling
pub mod shuffle;

pub use allocator::DrillAllocator;
pub use assembler::{generate_plan, PlanGenerator};
pub use catalog::{DrillCatalog, BUILTIN_DRILLS};
pub use composer::DayComposer;
pub use shuffle::seeded_shuffle;
