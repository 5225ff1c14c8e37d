// ABOUTME: Weekly plan assembly: base seed, per-day composition, overview text, and goal tip
// ABOUTME: Entry point of the planning algorithm; deterministic for identical input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan assembly
//!
//! [`PlanGenerator::generate`] is total over validated [`PlanInput`]: it never
//! fails, and the same input always yields the same [`Plan`].

use planner_core::models::{Goal, Plan, PlanInput, SkillArea};
use tracing::{debug, instrument};

use crate::catalog::DrillCatalog;
use crate::composer::{DayComposer, DayProfile};

/// Seed weight per weakness entry
const WEAKNESS_SEED_WEIGHT: i64 = 7;

/// Seed weight per practice day
const DAY_SEED_WEIGHT: i64 = 13;

/// Level label thresholds (exclusive upper bounds)
mod levels {
    pub const BEGINNER_BELOW: f64 = 3.0;
    pub const INTERMEDIATE_BELOW: f64 = 3.5;
    pub const ADVANCED_INTERMEDIATE_BELOW: f64 = 4.5;
}

/// Seed shared by every day of the plan
///
/// `floor(rating * 100) + weaknesses * 7 + days * 13`
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn base_seed(rating: f64, weakness_count: usize, days_per_week: u32) -> i64 {
    // Validated ratings are small and finite; `as` saturates otherwise
    let rating_part = (rating * 100.0).floor() as i64;
    let weakness_part = i64::try_from(weakness_count)
        .unwrap_or(i64::MAX)
        .saturating_mul(WEAKNESS_SEED_WEIGHT);
    rating_part
        .saturating_add(weakness_part)
        .saturating_add(i64::from(days_per_week) * DAY_SEED_WEIGHT)
}

/// Describe a rating in words
#[must_use]
pub fn level_label(rating: f64) -> &'static str {
    if rating < levels::BEGINNER_BELOW {
        "beginner"
    } else if rating < levels::INTERMEDIATE_BELOW {
        "intermediate"
    } else if rating < levels::ADVANCED_INTERMEDIATE_BELOW {
        "advanced intermediate"
    } else {
        "advanced"
    }
}

/// Advice for the week, by goal
#[must_use]
pub const fn weekly_tip(goal: Goal) -> &'static str {
    match goal {
        Goal::Recreational => {
            "Focus on having fun and building consistency this week. Don't worry about winning; focus on getting 80% of your serves in deep and keeping rallies going longer."
        }
        Goal::Competitive => {
            "Tournament mindset: practice your weakest shots under pressure. Play practice games where you start at 8-8 to simulate close-game intensity."
        }
        Goal::Rating => {
            "DUPR improvement comes from beating higher-rated players. Focus on reducing unforced errors first; that alone can boost your rating 0.2-0.3 points."
        }
        Goal::Youth => {
            "Keep it fun and varied! Young players develop fastest when they enjoy practice. Mix competition and cooperation. Celebrate effort over results."
        }
    }
}

/// Rating with one decimal, rounded from the exact binary value
///
/// Only exact ties (x.25, x.75) round up. A literal such as 4.35 is stored
/// just below the half-way point and prints as 4.3.
fn format_rating(rating: f64) -> String {
    // scaling by 4 is exact, so an odd whole quarter is a true tie
    let quarters = rating * 4.0;
    let is_tie = quarters.fract() == 0.0 && (quarters as i64) % 2 == 1;
    if is_tie {
        format!("{:.1}", rating + 0.05)
    } else {
        format!("{rating:.1}")
    }
}

/// Narrative summary placed at the top of the plan
#[must_use]
pub fn overview(input: &PlanInput) -> String {
    let youth_note = if input.is_youth {
        let age = input
            .age
            .filter(|&age| age > 0)
            .map_or_else(|| "youth".to_owned(), |age| age.to_string());
        format!(" Designed for a {age}-year-old player with age-appropriate intensity.")
    } else {
        String::new()
    };

    let focus = input
        .weaknesses
        .iter()
        .copied()
        .map(SkillArea::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "A {}-day/week training plan for a {} player ({} DUPR). Each session is {} minutes, focusing on: {focus}.{youth_note}",
        input.days_per_week,
        level_label(input.rating),
        format_rating(input.rating),
        input.time_per_session,
    )
}

/// Builds weekly plans from a drill catalog
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator<'a> {
    catalog: DrillCatalog<'a>,
}

impl Default for PlanGenerator<'static> {
    fn default() -> Self {
        Self::new(DrillCatalog::builtin())
    }
}

impl<'a> PlanGenerator<'a> {
    /// Create a generator over `catalog`
    #[must_use]
    pub const fn new(catalog: DrillCatalog<'a>) -> Self {
        Self { catalog }
    }

    /// The catalog drills are drawn from
    #[must_use]
    pub const fn catalog(&self) -> DrillCatalog<'a> {
        self.catalog
    }

    /// Generate the weekly plan for `input`
    #[must_use]
    #[instrument(skip_all, fields(rating = input.rating, days = input.days_per_week, minutes = input.time_per_session))]
    pub fn generate(&self, input: &PlanInput) -> Plan {
        let seed = base_seed(input.rating, input.weaknesses.len(), input.days_per_week);
        let composer = DayComposer::new(self.catalog);
        let profile = DayProfile {
            weaknesses: &input.weaknesses,
            rating: input.rating,
            is_youth: input.is_youth,
            session_minutes: input.time_per_session,
        };

        let days = (0..input.days_per_week as usize)
            .map(|day_index| composer.compose(&profile, day_index, seed))
            .collect::<Vec<_>>();

        debug!(seed, days = days.len(), goal = %input.goal, "Generated practice plan");

        Plan {
            overview: overview(input),
            days,
            weekly_tip: weekly_tip(input.goal).to_owned(),
        }
    }
}

/// Generate a plan from the built-in catalog
#[must_use]
pub fn generate_plan(input: &PlanInput) -> Plan {
    PlanGenerator::default().generate(input)
}
