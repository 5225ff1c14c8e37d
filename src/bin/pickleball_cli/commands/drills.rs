// ABOUTME: Drills command for pickleball-cli
// ABOUTME: Lists catalog drills by skill, rating, and audience, or shows one drill by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Context, Result};
use planner_core::models::SkillArea;
use planner_intelligence::DrillCatalog;

use crate::helpers::display::display_drill;

/// Print the drills matching the filters
pub fn list(skill: Option<&str>, rating: Option<f64>, youth: bool) -> Result<()> {
    let skill = skill
        .map(str::parse::<SkillArea>)
        .transpose()
        .context("Use `pickleball-cli options` to see the skill areas")?;

    let drills = DrillCatalog::builtin().matching(skill, rating, youth);
    if drills.is_empty() {
        println!("No drills match those filters.");
        return Ok(());
    }

    println!("{} drill(s)", drills.len());
    for drill in drills {
        display_drill(drill);
    }
    Ok(())
}

/// Print a single drill by its exact name
pub fn show(name: &str) -> Result<()> {
    let drill = DrillCatalog::builtin().find(name).ok_or_else(|| {
        anyhow!("No drill named '{name}'. Use `pickleball-cli drills` to list them")
    })?;
    display_drill(drill);
    Ok(())
}
