// ABOUTME: Integration tests for weekly plan generation properties and reference scenarios
// ABOUTME: Covers determinism, day structure, budgets, youth filtering, and text selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::profiles::{default_profile, profile_with_rating, youth_profile};
use pickleball_planner::models::{Goal, Plan, PlanInput, SkillArea};
use pickleball_planner::{generate_plan, DrillCatalog, PlanGenerator};
use std::collections::HashSet;

fn drill_names(plan: &Plan) -> Vec<String> {
    plan.days
        .iter()
        .flat_map(|day| day.drills.iter().map(|drill| drill.name.clone()))
        .collect()
}

fn day_summary(plan: &Plan, day: usize) -> Vec<(&str, u32)> {
    plan.days[day]
        .drills
        .iter()
        .map(|drill| (drill.name.as_str(), drill.duration))
        .collect()
}

/// Profiles spanning every rating tier, session length, week size, and audience
fn profile_grid() -> Vec<PlanInput> {
    let weakness_sets = [
        vec![SkillArea::Dinking, SkillArea::Drops],
        vec![SkillArea::Serves, SkillArea::Lobs, SkillArea::Resets],
        vec![
            SkillArea::Strategy,
            SkillArea::Transitions,
            SkillArea::Footwork,
            SkillArea::Volleys,
            SkillArea::Drives,
        ],
        vec![SkillArea::Volleys, SkillArea::Volleys, SkillArea::Dinking],
    ];

    let mut grid = Vec::new();
    for rating in [2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 6.0] {
        for weaknesses in &weakness_sets {
            for time_per_session in [30, 60, 90, 120] {
                for days_per_week in [2, 3, 4, 5, 6] {
                    for is_youth in [false, true] {
                        grid.push(PlanInput {
                            rating,
                            weaknesses: weaknesses.clone(),
                            time_per_session,
                            days_per_week,
                            goal: Goal::Competitive,
                            is_youth,
                            age: None,
                        });
                    }
                }
            }
        }
    }
    grid
}

// ============================================================================
// Structural properties over the whole profile grid
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    for input in profile_grid() {
        let first = serde_json::to_string(&generate_plan(&input)).unwrap();
        let second = serde_json::to_string(&generate_plan(&input)).unwrap();
        assert_eq!(first, second, "plan changed between calls for {input:?}");
    }
}

#[test]
fn test_day_count_matches_days_per_week() {
    for input in profile_grid() {
        let plan = generate_plan(&input);
        assert_eq!(plan.days.len(), input.days_per_week as usize);
    }
}

#[test]
fn test_every_day_starts_with_warm_up_and_ends_with_cool_down() {
    for input in profile_grid() {
        for day in generate_plan(&input).days {
            assert_eq!(day.drills[0].name, "Warm-Up");
            assert!(day.drills[0].duration > 0);
            assert!(!day.cool_down.is_empty());
            assert_eq!(day.duration, input.time_per_session);
        }
    }
}

#[test]
fn test_scheduled_minutes_never_exceed_session() {
    for input in profile_grid() {
        for day in generate_plan(&input).days {
            assert!(
                day.scheduled_minutes() <= input.time_per_session,
                "{} scheduled {} of {} minutes",
                day.title,
                day.scheduled_minutes(),
                input.time_per_session
            );
            assert!(day.drills.iter().all(|drill| drill.duration > 0));
        }
    }
}

#[test]
fn test_youth_plans_exclude_unsuitable_drills() {
    let excluded: HashSet<&str> = DrillCatalog::builtin()
        .drills()
        .iter()
        .filter(|drill| !drill.youth_friendly)
        .map(|drill| drill.name)
        .collect();
    assert!(!excluded.is_empty());

    for input in profile_grid().into_iter().filter(|input| input.is_youth) {
        for name in drill_names(&generate_plan(&input)) {
            assert!(!excluded.contains(name.as_str()), "{name} in youth plan");
        }
    }
}

#[test]
fn test_focus_names_at_most_two_areas() {
    for input in profile_grid() {
        for day in generate_plan(&input).days {
            assert!(day.focus.split(" & ").count() <= 2, "{}", day.focus);
        }
    }
}

// ============================================================================
// Rating, level, and goal text
// ============================================================================

#[test]
fn test_rating_changes_drill_selection() {
    let mut low = drill_names(&generate_plan(&profile_with_rating(2.5)));
    let mut high = drill_names(&generate_plan(&profile_with_rating(4.5)));
    low.sort();
    high.sort();
    assert_ne!(low, high);
}

#[test]
fn test_level_labels_in_overview() {
    assert!(generate_plan(&profile_with_rating(2.5))
        .overview
        .contains("beginner"));
    assert!(generate_plan(&profile_with_rating(5.0))
        .overview
        .contains("advanced player"));
}

#[test]
fn test_goal_selects_weekly_tip() {
    let with_goal = |goal| {
        generate_plan(&PlanInput {
            goal,
            ..default_profile()
        })
        .weekly_tip
    };
    assert!(with_goal(Goal::Youth).contains("fun"));
    assert!(with_goal(Goal::Rating).contains("DUPR"));
    assert_ne!(with_goal(Goal::Recreational), with_goal(Goal::Competitive));
}

#[test]
fn test_unknown_goal_falls_back_to_competitive_tip() {
    let fallback = PlanInput {
        goal: Goal::from_str_or_default("trophies"),
        ..default_profile()
    };
    assert_eq!(
        generate_plan(&fallback).weekly_tip,
        generate_plan(&default_profile()).weekly_tip
    );
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_default_profile_scenario() {
    let plan = generate_plan(&default_profile());

    assert_eq!(plan.days.len(), 3);
    assert!(plan.overview.contains("3.5"));
    assert!(plan.overview.contains("dinking"));
    assert!(plan.weekly_tip.len() > 20);

    assert_eq!(
        day_summary(&plan, 0),
        vec![
            ("Warm-Up", 8),
            ("Figure-8 Dinking Pattern", 10),
            ("Wall Dink Practice", 8),
            ("Drop vs Drive Decision", 12),
            ("Bucket Drop Practice", 10),
        ]
    );
    assert_eq!(
        day_summary(&plan, 2),
        vec![
            ("Warm-Up", 8),
            ("Figure-8 Dinking Pattern", 10),
            ("Dink & Attack Decision Making", 15),
            ("Bucket Drop Practice", 10),
            ("Drop Shot Ladder", 12),
        ]
    );
    assert_eq!(plan.days[1].title, "Day 2: Power & Placement");
    assert_eq!(plan.days[1].focus, "dinking & drops");
}

#[test]
fn test_thirty_minute_sessions_stay_within_budget() {
    let plan = generate_plan(&PlanInput {
        time_per_session: 30,
        ..default_profile()
    });

    for day in &plan.days {
        assert!(day.scheduled_minutes() <= 30);
    }
    // 30 - 8 - 5 leaves 17 drill minutes; the last drill is cut short
    assert_eq!(
        day_summary(&plan, 0),
        vec![
            ("Warm-Up", 8),
            ("Figure-8 Dinking Pattern", 10),
            ("Drop vs Drive Decision", 7),
        ]
    );
}

#[test]
fn test_youth_scenario() {
    let plan = generate_plan(&youth_profile());

    assert!(plan.overview.contains("12"));
    assert!(plan.overview.contains("age-appropriate intensity"));
    assert!(plan.weekly_tip.contains("fun"));
    for day in &plan.days {
        assert_eq!(day.drills[0].duration, 7);
        assert!(day.drills.len() >= 2);
    }
}

#[test]
fn test_six_weaknesses_over_three_days() {
    let plan = generate_plan(&PlanInput {
        weaknesses: vec![
            SkillArea::Dinking,
            SkillArea::Drives,
            SkillArea::Serves,
            SkillArea::Volleys,
            SkillArea::Drops,
            SkillArea::Footwork,
        ],
        ..default_profile()
    });

    assert_eq!(plan.days.len(), 3);
    for day in &plan.days {
        assert!(day.drills.len() >= 2);
        assert!(day.scheduled_minutes() <= 60);
    }
    assert_eq!(plan.days[0].focus, "dinking & drives");
    assert_eq!(plan.days[1].focus, "drives & serves");
    assert_eq!(plan.days[2].focus, "serves & volleys");
    assert!(plan
        .overview
        .ends_with("dinking, drives, serves, volleys, drops, footwork."));
}

#[test]
fn test_no_eligible_drills_leaves_warm_up_only() {
    let plan = generate_plan(&PlanInput {
        rating: 2.0,
        weaknesses: vec![SkillArea::Strategy, SkillArea::Transitions],
        time_per_session: 30,
        days_per_week: 2,
        goal: Goal::Youth,
        is_youth: true,
        age: None,
    });

    for (index, day) in plan.days.iter().enumerate() {
        assert_eq!(day_summary(&plan, index), vec![("Warm-Up", 7)]);
        assert!(!day.cool_down.is_empty());
    }
    assert!(plan.overview.contains("youth-year-old"));
}

#[test]
fn test_custom_catalog_generator() {
    let generator = PlanGenerator::new(DrillCatalog::new(&[]));
    let plan = generator.generate(&default_profile());
    assert_eq!(plan.days.len(), 3);
    assert!(plan.days.iter().all(|day| day.drills.len() == 1));
}
