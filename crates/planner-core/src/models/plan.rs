// ABOUTME: Practice plan data structures: player profile input and the generated weekly plan
// ABOUTME: Plain serializable records created fresh for every generation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::{Drill, Goal, SkillArea};

/// Validated player profile consumed by the plan generator
///
/// Preconditions (enforced at the request boundary, not here): `weaknesses`
/// is non-empty and `rating` lies within the DUPR range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    /// DUPR rating
    pub rating: f64,
    /// Skill areas to emphasize, in the player's order (duplicates allowed)
    pub weaknesses: Vec<SkillArea>,
    /// Session length in minutes
    pub time_per_session: u32,
    /// Number of practice days in the week
    pub days_per_week: u32,
    /// Player goal
    #[serde(default)]
    pub goal: Goal,
    /// Youth player flag; gates drill eligibility
    #[serde(default)]
    pub is_youth: bool,
    /// Player age, used only in the overview text
    #[serde(default)]
    pub age: Option<u32>,
}

/// A drill as scheduled in a plan
///
/// `duration` is the time actually allocated, which may be shorter than the
/// catalog drill's nominal duration when the day's budget runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDrill {
    /// Drill name
    pub name: String,
    /// What to do
    pub description: String,
    /// Coaching cue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaching_tip: Option<String>,
    /// Variation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Allocated minutes
    pub duration: u32,
}

impl PlanDrill {
    /// Schedule a catalog drill for `minutes`
    #[must_use]
    pub fn from_catalog(drill: &Drill, minutes: u32) -> Self {
        Self {
            name: drill.name.to_owned(),
            description: drill.description.to_owned(),
            coaching_tip: drill.coaching_tip.map(str::to_owned),
            variation: drill.variation.map(str::to_owned),
            duration: minutes,
        }
    }
}

/// One practice day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// `"Day N: Theme"`
    pub title: String,
    /// Up to two emphasized skill areas joined with `" & "`
    pub focus: String,
    /// Nominal session length in minutes
    pub duration: u32,
    /// Warm-up first, then the allocated drills
    pub drills: Vec<PlanDrill>,
    /// Cool-down routine
    pub cool_down: String,
}

impl PlanDay {
    /// Sum of allocated minutes across every drill, warm-up included
    #[must_use]
    pub fn scheduled_minutes(&self) -> u32 {
        self.drills.iter().map(|drill| drill.duration).sum()
    }
}

/// A complete weekly practice plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Narrative summary of the profile
    pub overview: String,
    /// One entry per practice day
    pub days: Vec<PlanDay>,
    /// Goal-specific advice for the week
    pub weekly_tip: String,
}

impl Plan {
    /// Render the plan as plain text for terminals
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", self.overview);
        for day in &self.days {
            let _ = writeln!(out);
            let _ = writeln!(out, "{} ({} min)", day.title, day.duration);
            let _ = writeln!(out, "Focus: {}", day.focus);
            for drill in &day.drills {
                let _ = writeln!(out, "  - {} ({} min)", drill.name, drill.duration);
                if let Some(tip) = &drill.coaching_tip {
                    let _ = writeln!(out, "      Tip: {tip}");
                }
                if let Some(variation) = &drill.variation {
                    let _ = writeln!(out, "      Variation: {variation}");
                }
            }
            let _ = writeln!(out, "Cool-down: {}", day.cool_down);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Weekly tip: {}", self.weekly_tip);
        out
    }
}
