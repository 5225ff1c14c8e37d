// ABOUTME: Output formatting helpers for pickleball-cli
// ABOUTME: Consistent terminal rendering for drills and option lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pickleball_planner::routes::catalog::OptionEntry;
use planner_core::models::Drill;

/// Print one catalog drill
pub fn display_drill(drill: &Drill) {
    println!("\n{} ({} min)", drill.name, drill.duration);
    println!("{}", "-".repeat(drill.name.len()));
    println!(
        "   Skill: {}   Rating: {:.1}-{:.1}   Youth: {}",
        drill.skill.label(),
        drill.min_rating,
        drill.max_rating,
        if drill.youth_friendly { "yes" } else { "no" }
    );
    println!("   {}", drill.description);
    if let Some(tip) = drill.coaching_tip {
        println!("   Tip: {tip}");
    }
    if let Some(variation) = drill.variation {
        println!("   Variation: {variation}");
    }
}

/// Print an `id  label` list under a heading
pub fn display_choices(title: &str, entries: &[OptionEntry]) {
    println!("\n{title}:");
    let width = entries.iter().map(|entry| entry.id.len()).max().unwrap_or(0);
    for entry in entries {
        println!("   {:<width$}  {}", entry.id, entry.label);
    }
}
