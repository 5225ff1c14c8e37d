// ABOUTME: Domain models for the pickleball practice planner
// ABOUTME: Re-exports skill areas, goals, catalog drills, and plan structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog drill records
mod drill;
/// Player goal enumeration
mod goal;
/// Plan input and output structures
mod plan;
/// Skill area enumeration
mod skill;

pub use drill::Drill;
pub use goal::Goal;
pub use plan::{Plan, PlanDay, PlanDrill, PlanInput};
pub use skill::{SkillArea, UnknownSkillArea};
