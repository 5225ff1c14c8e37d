// ABOUTME: Request boundary validation turning a loosely typed plan request into PlanInput
// ABOUTME: Shared by the HTTP handler and the CLI so both reject the same profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan request validation
//!
//! Checks run in a fixed order and the first failure wins, so clients see
//! one message at a time.

use planner_core::constants::profile_limits;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::{Goal, PlanInput, SkillArea};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Raw plan request as sent by the profile wizard
///
/// Every field is optional at parse time; [`PlanRequest::validate`] decides
/// what is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// DUPR rating
    pub rating: Option<f64>,
    /// Skill identifiers, validated against [`SkillArea`]
    pub weaknesses: Option<Vec<String>>,
    /// Session length in minutes
    pub time_per_session: Option<u32>,
    /// Practice days per week
    pub days_per_week: Option<u32>,
    /// Goal identifier; unknown or empty means competitive
    pub goal: Option<String>,
    /// Youth player flag
    pub is_youth: Option<bool>,
    /// Player age; zero is treated as absent
    pub age: Option<u32>,
}

impl PlanRequest {
    /// Validate into a [`PlanInput`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `InvalidInput` and the first failing rule's
    /// message; `details.field` names the offending field
    pub fn validate(self) -> AppResult<PlanInput> {
        let rating = self
            .rating
            .filter(|rating| {
                (profile_limits::MIN_RATING..=profile_limits::MAX_RATING).contains(rating)
            })
            .ok_or_else(|| rejected("rating", "Rating must be between 2.0 and 6.0"))?;

        let raw_weaknesses = self
            .weaknesses
            .filter(|list| list.len() >= profile_limits::MIN_WEAKNESSES)
            .ok_or_else(|| rejected("weaknesses", "Select at least 2 skill areas to focus on"))?;
        let weaknesses = parse_weaknesses(&raw_weaknesses)?;

        let time_per_session = self
            .time_per_session
            .filter(|minutes| profile_limits::SESSION_MINUTES.contains(minutes))
            .ok_or_else(|| rejected("timePerSession", "Invalid session time"))?;

        let days_per_week = self
            .days_per_week
            .filter(|days| profile_limits::DAYS_PER_WEEK.contains(days))
            .ok_or_else(|| rejected("daysPerWeek", "Invalid days per week"))?;

        let goal = self
            .goal
            .as_deref()
            .map_or_else(Goal::default, Goal::from_str_or_default);

        Ok(PlanInput {
            rating,
            weaknesses,
            time_per_session,
            days_per_week,
            goal,
            is_youth: self.is_youth.unwrap_or(false),
            age: self.age.filter(|&age| age > 0),
        })
    }
}

/// Parse every identifier, reporting all unknown ones together
fn parse_weaknesses(raw: &[String]) -> AppResult<Vec<SkillArea>> {
    let mut parsed = Vec::with_capacity(raw.len());
    let mut unknown = Vec::new();
    for id in raw {
        match id.parse::<SkillArea>() {
            Ok(skill) => parsed.push(skill),
            Err(_) => unknown.push(id.as_str()),
        }
    }

    if unknown.is_empty() {
        Ok(parsed)
    } else {
        Err(AppError::invalid_input(format!(
            "Invalid skill areas: {}",
            unknown.join(", ")
        ))
        .with_details(json!({ "field": "weaknesses", "unknown": unknown })))
    }
}

fn rejected(field: &str, message: &str) -> AppError {
    AppError::invalid_input(message).with_details(json!({ "field": field }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::errors::ErrorCode;

    fn valid_request() -> PlanRequest {
        PlanRequest {
            rating: Some(3.5),
            weaknesses: Some(vec!["dinking".into(), "drops".into()]),
            time_per_session: Some(60),
            days_per_week: Some(3),
            ..PlanRequest::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let input = valid_request().validate().unwrap();
        assert_eq!(input.goal, Goal::Competitive);
        assert!(!input.is_youth);
        assert_eq!(input.age, None);
        assert_eq!(input.weaknesses, vec![SkillArea::Dinking, SkillArea::Drops]);
    }

    #[test]
    fn test_first_failure_wins() {
        let request = PlanRequest {
            rating: Some(7.0),
            time_per_session: Some(45),
            ..valid_request()
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.message, "Rating must be between 2.0 and 6.0");
        assert_eq!(error.context.details["field"], "rating");
    }

    #[test]
    fn test_unknown_skills_listed_in_order() {
        let request = PlanRequest {
            weaknesses: Some(vec!["dinking".into(), "spin".into(), "Drops".into()]),
            ..valid_request()
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.message, "Invalid skill areas: spin, Drops");
    }

    #[test]
    fn test_goal_and_age_leniency() {
        let request = PlanRequest {
            goal: Some("world-domination".into()),
            age: Some(0),
            is_youth: Some(true),
            ..valid_request()
        };
        let input = request.validate().unwrap();
        assert_eq!(input.goal, Goal::Competitive);
        assert_eq!(input.age, None);
        assert!(input.is_youth);
    }
}
