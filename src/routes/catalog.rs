// ABOUTME: Drill catalog and wizard option route handlers
// ABOUTME: Lists catalog drills with optional filters and the accepted profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use planner_core::constants::profile_limits;
use planner_core::errors::AppError;
use planner_core::models::{Drill, Goal, SkillArea};
use planner_intelligence::DrillCatalog;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Query parameters for `GET /api/drills`
#[derive(Debug, Default, Deserialize)]
pub struct DrillQuery {
    /// Skill identifier
    #[serde(default)]
    pub skill: Option<String>,
    /// Rating the drill must suit
    #[serde(default)]
    pub rating: Option<f64>,
    /// Only youth-friendly drills
    #[serde(default)]
    pub youth: bool,
}

/// Drill listing response
#[derive(Debug, Serialize)]
pub struct DrillListResponse {
    /// Number of drills returned
    pub count: usize,
    /// Matching drills in catalog order
    pub drills: Vec<Drill>,
}

/// An `id`/`label` pair offered by the wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionEntry {
    /// Wire identifier
    pub id: String,
    /// Display label
    pub label: String,
}

/// Accepted rating range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingRange {
    /// Lowest rating
    pub min: f64,
    /// Highest rating
    pub max: f64,
}

/// Every choice the profile wizard offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Selectable weaknesses
    pub skill_areas: Vec<OptionEntry>,
    /// Selectable goals
    pub goals: Vec<OptionEntry>,
    /// Session lengths in minutes
    pub session_minutes: Vec<u32>,
    /// Practice days per week
    pub days_per_week: Vec<u32>,
    /// Accepted ratings
    pub rating: RatingRange,
    /// Fewest weaknesses a plan needs
    pub min_weaknesses: usize,
}

impl PlanOptions {
    /// Options derived from the profile limits
    #[must_use]
    pub fn current() -> Self {
        Self {
            skill_areas: SkillArea::ALL
                .iter()
                .map(|skill| OptionEntry {
                    id: skill.as_str().to_owned(),
                    label: skill.label().to_owned(),
                })
                .collect(),
            goals: Goal::ALL
                .iter()
                .map(|goal| OptionEntry {
                    id: goal.as_str().to_owned(),
                    label: goal.label().to_owned(),
                })
                .collect(),
            session_minutes: profile_limits::SESSION_MINUTES.to_vec(),
            days_per_week: profile_limits::DAYS_PER_WEEK.to_vec(),
            rating: RatingRange {
                min: profile_limits::MIN_RATING,
                max: profile_limits::MAX_RATING,
            },
            min_weaknesses: profile_limits::MIN_WEAKNESSES,
        }
    }
}

/// Catalog routes
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create the catalog and options routes
    pub fn routes(catalog: DrillCatalog<'static>) -> Router {
        Router::new()
            .route("/api/drills", get(Self::handle_list_drills))
            .route("/api/drills/:name", get(Self::handle_get_drill))
            .route("/api/options", get(Self::handle_options))
            .with_state(catalog)
    }

    async fn handle_list_drills(
        State(catalog): State<DrillCatalog<'static>>,
        Query(query): Query<DrillQuery>,
    ) -> Result<Response, AppError> {
        let skill = query
            .skill
            .as_deref()
            .map(str::parse::<SkillArea>)
            .transpose()
            .map_err(|e| {
                AppError::invalid_input(format!("Invalid skill area: {}", e.0))
                    .with_details(json!({ "field": "skill" }))
            })?;

        let drills: Vec<Drill> = catalog
            .matching(skill, query.rating, query.youth)
            .into_iter()
            .copied()
            .collect();

        Ok(Json(DrillListResponse {
            count: drills.len(),
            drills,
        })
        .into_response())
    }

    /// Look one drill up by its exact name
    async fn handle_get_drill(
        State(catalog): State<DrillCatalog<'static>>,
        Path(name): Path<String>,
    ) -> Result<Json<Drill>, AppError> {
        catalog
            .find(&name)
            .copied()
            .map(Json)
            .ok_or_else(|| AppError::not_found(format!("Drill '{name}'")))
    }

    async fn handle_options() -> Json<PlanOptions> {
        Json(PlanOptions::current())
    }
}
