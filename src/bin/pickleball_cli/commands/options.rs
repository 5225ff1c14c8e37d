// ABOUTME: Options command for pickleball-cli
// ABOUTME: Prints the skill areas, goals, and session settings a plan accepts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pickleball_planner::routes::PlanOptions;

use crate::helpers::display::display_choices;

/// Print every accepted profile value
pub fn show() {
    let options = PlanOptions::current();

    display_choices("Skill areas", &options.skill_areas);
    display_choices("Goals", &options.goals);

    let minutes: Vec<String> = options.session_minutes.iter().map(u32::to_string).collect();
    let days: Vec<String> = options.days_per_week.iter().map(u32::to_string).collect();
    println!("\nSession minutes: {}", minutes.join(", "));
    println!("Days per week: {}", days.join(", "));
    println!(
        "Rating: {:.1} - {:.1} (pick at least {} skill areas)",
        options.rating.min, options.rating.max, options.min_weaknesses
    );
}
