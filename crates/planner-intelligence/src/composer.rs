// ABOUTME: Builds a single practice day: weakness rotation, themed title, warm-up, drills, cool-down
// ABOUTME: Delegates drill selection to the allocator with a per-day seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::models::{PlanDay, PlanDrill, SkillArea};
use tracing::debug;

use crate::allocator::DrillAllocator;
use crate::catalog::DrillCatalog;
use crate::session;

/// Day themes, cycled by day index
pub const DAY_THEMES: [&str; 6] = [
    "Touch & Control",
    "Power & Placement",
    "Defense & Resets",
    "Game Situations",
    "Speed & Agility",
    "Full Court Mastery",
];

/// Most weaknesses worked on in a single day once rotation kicks in
pub const MAX_DAILY_WEAKNESSES: usize = 3;

/// Seed distance between consecutive days
pub const DAY_SEED_STRIDE: i64 = 100;

/// Name of the synthetic first drill of every day
pub const WARM_UP_NAME: &str = "Warm-Up";

const FOCUS_AREAS: usize = 2;

/// Weakness lists at least this long rotate day to day
const ROTATION_MIN_WEAKNESSES: usize = 3;

/// Weaknesses active on `day_index`
///
/// Two or fewer entries are used as given every day. Longer lists are
/// rotated left by `day_index % len` and capped at three. Repeated skills
/// count toward the length.
#[must_use]
pub fn rotate_weaknesses(weaknesses: &[SkillArea], day_index: usize) -> Vec<SkillArea> {
    if weaknesses.len() < ROTATION_MIN_WEAKNESSES {
        return weaknesses.to_vec();
    }
    let offset = day_index % weaknesses.len();
    weaknesses[offset..]
        .iter()
        .chain(&weaknesses[..offset])
        .take(MAX_DAILY_WEAKNESSES)
        .copied()
        .collect()
}

/// First two distinct weaknesses joined with `" & "`
#[must_use]
pub fn focus_label(weaknesses: &[SkillArea]) -> String {
    let mut distinct: Vec<SkillArea> = Vec::with_capacity(FOCUS_AREAS);
    for &weakness in weaknesses {
        if distinct.len() == FOCUS_AREAS {
            break;
        }
        if !distinct.contains(&weakness) {
            distinct.push(weakness);
        }
    }
    distinct
        .into_iter()
        .map(SkillArea::as_str)
        .collect::<Vec<_>>()
        .join(" & ")
}

/// `"Day N: Theme"` for a zero-based day index
#[must_use]
pub fn day_title(day_index: usize) -> String {
    format!(
        "Day {}: {}",
        day_index + 1,
        DAY_THEMES[day_index % DAY_THEMES.len()]
    )
}

/// Profile fields a day depends on
#[derive(Debug, Clone, Copy)]
pub struct DayProfile<'w> {
    /// Full weakness list in the player's order
    pub weaknesses: &'w [SkillArea],
    /// DUPR rating
    pub rating: f64,
    /// Youth flag
    pub is_youth: bool,
    /// Session length in minutes
    pub session_minutes: u32,
}

/// Composes practice days over a catalog
#[derive(Debug, Clone, Copy)]
pub struct DayComposer<'a> {
    allocator: DrillAllocator<'a>,
}

impl<'a> DayComposer<'a> {
    /// Create a composer over `catalog`
    #[must_use]
    pub const fn new(catalog: DrillCatalog<'a>) -> Self {
        Self {
            allocator: DrillAllocator::new(catalog),
        }
    }

    /// Build day `day_index` of the week
    ///
    /// The day's seed is `base_seed + day_index * 100`. When the session is
    /// too short to leave drill time after warm-up and cool-down, the day
    /// holds only the warm-up.
    #[must_use]
    pub fn compose(&self, profile: &DayProfile<'_>, day_index: usize, base_seed: i64) -> PlanDay {
        let active = rotate_weaknesses(profile.weaknesses, day_index);

        let warmup = session::warmup_minutes(profile.rating, profile.is_youth);
        let cooldown = session::cooldown_minutes(profile.is_youth);
        let drill_minutes =
            i64::from(profile.session_minutes) - i64::from(warmup) - i64::from(cooldown);

        let day_offset = i64::try_from(day_index)
            .unwrap_or(i64::MAX)
            .saturating_mul(DAY_SEED_STRIDE);
        let day_seed = base_seed.saturating_add(day_offset);

        let mut drills = Vec::with_capacity(1 + active.len() * 2);
        drills.push(PlanDrill {
            name: WARM_UP_NAME.to_owned(),
            description: session::warmup_routine(profile.rating, profile.is_youth).to_owned(),
            coaching_tip: None,
            variation: None,
            duration: warmup,
        });
        drills.extend(self.allocator.allocate(
            &active,
            profile.rating,
            profile.is_youth,
            drill_minutes,
            day_seed,
        ));

        let day = PlanDay {
            title: day_title(day_index),
            focus: focus_label(&active),
            duration: profile.session_minutes,
            drills,
            cool_down: session::cooldown_routine(profile.rating, profile.is_youth).to_owned(),
        };

        debug!(
            day = day_index + 1,
            seed = day_seed,
            drill_minutes,
            scheduled = day.scheduled_minutes(),
            drills = day.drills.len(),
            "Composed practice day"
        );
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SkillArea::{Dinking, Drives, Drops, Footwork, Serves, Volleys};

    #[test]
    fn test_short_lists_are_not_rotated() {
        assert_eq!(rotate_weaknesses(&[Drops, Dinking], 1), vec![Drops, Dinking]);
        assert_eq!(rotate_weaknesses(&[Serves], 4), vec![Serves]);
    }

    #[test]
    fn test_long_lists_rotate_and_cap() {
        let all = [Dinking, Drives, Serves, Volleys, Drops, Footwork];
        assert_eq!(rotate_weaknesses(&all, 0), vec![Dinking, Drives, Serves]);
        assert_eq!(rotate_weaknesses(&all, 4), vec![Drops, Footwork, Dinking]);
        assert_eq!(rotate_weaknesses(&all, 6), vec![Dinking, Drives, Serves]);

        let three = [Dinking, Drives, Serves];
        assert_eq!(rotate_weaknesses(&three, 1), vec![Drives, Serves, Dinking]);
    }

    #[test]
    fn test_rotation_counts_repeated_entries() {
        // three entries with only two distinct skills still rotate
        let repeated = [Volleys, Volleys, Dinking];
        assert_eq!(
            rotate_weaknesses(&repeated, 1),
            vec![Volleys, Dinking, Volleys]
        );
        assert_eq!(
            rotate_weaknesses(&repeated, 2),
            vec![Dinking, Volleys, Volleys]
        );
    }

    #[test]
    fn test_focus_label_skips_duplicates() {
        assert_eq!(focus_label(&[Dinking, Drops]), "dinking & drops");
        assert_eq!(focus_label(&[Dinking, Dinking, Serves]), "dinking & serves");
        assert_eq!(focus_label(&[Volleys, Volleys]), "volleys");
        assert_eq!(focus_label(&[]), "");
    }

    #[test]
    fn test_titles_cycle_through_themes() {
        assert_eq!(day_title(0), "Day 1: Touch & Control");
        assert_eq!(day_title(5), "Day 6: Full Court Mastery");
        assert_eq!(day_title(6), "Day 7: Touch & Control");
    }

    #[test]
    fn test_compose_first_default_day() {
        let composer = DayComposer::new(DrillCatalog::builtin());
        let profile = DayProfile {
            weaknesses: &[Dinking, Drops],
            rating: 3.5,
            is_youth: false,
            session_minutes: 60,
        };
        // 350 + 2 * 7 + 3 * 13
        let day = composer.compose(&profile, 0, 403);

        let summary: Vec<(&str, u32)> = day
            .drills
            .iter()
            .map(|drill| (drill.name.as_str(), drill.duration))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Warm-Up", 8),
                ("Figure-8 Dinking Pattern", 10),
                ("Wall Dink Practice", 8),
                ("Drop vs Drive Decision", 12),
                ("Bucket Drop Practice", 10),
            ]
        );
        assert_eq!(day.title, "Day 1: Touch & Control");
        assert_eq!(day.focus, "dinking & drops");
        assert_eq!(day.duration, 60);
        assert!(day.drills[0].coaching_tip.is_none());
        assert!(!day.cool_down.is_empty());
    }

    #[test]
    fn test_session_shorter_than_overhead_has_only_warm_up() {
        let composer = DayComposer::new(DrillCatalog::builtin());
        let profile = DayProfile {
            weaknesses: &[Dinking, Drops],
            rating: 4.5,
            is_youth: false,
            session_minutes: 15,
        };
        let day = composer.compose(&profile, 2, 1);
        assert_eq!(day.drills.len(), 1);
        assert_eq!(day.drills[0].name, WARM_UP_NAME);
        assert_eq!(day.drills[0].duration, 10);
    }
}
