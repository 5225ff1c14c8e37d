// ABOUTME: Plan command for pickleball-cli
// ABOUTME: Runs the HTTP boundary's validation on CLI flags, then prints the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pickleball_planner::validation::PlanRequest;
use pickleball_planner::PlanGenerator;

use crate::OutputFormat;

/// Profile flags as given on the command line
pub struct PlanArgs {
    pub rating: f64,
    pub weaknesses: Vec<String>,
    pub minutes: u32,
    pub days: u32,
    pub goal: Option<String>,
    pub youth: bool,
    pub age: Option<u32>,
}

impl From<PlanArgs> for PlanRequest {
    fn from(args: PlanArgs) -> Self {
        Self {
            rating: Some(args.rating),
            weaknesses: Some(args.weaknesses),
            time_per_session: Some(args.minutes),
            days_per_week: Some(args.days),
            goal: args.goal,
            is_youth: Some(args.youth),
            age: args.age,
        }
    }
}

/// Validate, generate, and print a plan
pub fn run(args: PlanArgs, format: OutputFormat) -> Result<()> {
    let input = PlanRequest::from(args).validate()?;
    let plan = PlanGenerator::default().generate(&input);

    match format {
        OutputFormat::Text => print!("{}", plan.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}
