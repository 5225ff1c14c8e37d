// ABOUTME: Player profile builders shared by plan generator and route tests
// ABOUTME: Starts from the wizard's default profile and overrides single fields

#![allow(dead_code)]

use pickleball_planner::models::{Goal, PlanInput, SkillArea};

/// 3.5 player, dinking and drops, three 60-minute sessions
pub fn default_profile() -> PlanInput {
    PlanInput {
        rating: 3.5,
        weaknesses: vec![SkillArea::Dinking, SkillArea::Drops],
        time_per_session: 60,
        days_per_week: 3,
        goal: Goal::Competitive,
        is_youth: false,
        age: None,
    }
}

/// Default profile at another rating
pub fn profile_with_rating(rating: f64) -> PlanInput {
    PlanInput {
        rating,
        ..default_profile()
    }
}

/// Default profile as a 12-year-old youth player
pub fn youth_profile() -> PlanInput {
    PlanInput {
        goal: Goal::Youth,
        is_youth: true,
        age: Some(12),
        ..default_profile()
    }
}

/// Request body equivalent to [`default_profile`]
pub fn default_request_json() -> serde_json::Value {
    serde_json::json!({
        "rating": 3.5,
        "weaknesses": ["dinking", "drops"],
        "timePerSession": 60,
        "daysPerWeek": 3
    })
}
