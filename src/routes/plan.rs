// ABOUTME: Plan generation route handler for the weekly practice plan endpoint
// ABOUTME: Validates the wizard's request body and returns the generated plan as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan generation routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use planner_core::errors::AppError;
use planner_core::models::Plan;
use planner_intelligence::PlanGenerator;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::logging::AppLogger;
use crate::middleware::REQUEST_ID_HEADER;
use crate::validation::PlanRequest;

/// Successful response body
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// The generated plan
    pub plan: Plan,
}

/// Plan generation routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan generation route
    pub fn routes(generator: PlanGenerator<'static>) -> Router {
        Router::new()
            .route("/api/generate-plan", post(Self::handle_generate_plan))
            .with_state(generator)
    }

    /// Handle `POST /api/generate-plan`
    async fn handle_generate_plan(
        State(generator): State<PlanGenerator<'static>>,
        headers: HeaderMap,
        payload: Result<Json<PlanRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let attach_id = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        let Json(request) = payload.map_err(|rejection| {
            AppLogger::log_rejected_request(&rejection.body_text());
            attach_id(AppError::invalid_format(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        })?;

        let input = request.validate().map_err(|error| {
            AppLogger::log_rejected_request(&error.message);
            attach_id(error)
        })?;

        let plan = generator.generate(&input);
        let drills = plan.days.iter().map(|day| day.drills.len()).sum();
        AppLogger::log_plan_generated(input.rating, plan.days.len(), input.time_per_session, drills);
        info!(goal = %input.goal, youth = input.is_youth, "Returning practice plan");

        Ok((StatusCode::OK, Json(PlanResponse { plan })).into_response())
    }
}
