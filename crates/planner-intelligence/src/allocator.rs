// ABOUTME: Time-budget allocator splitting a day's drill minutes across weakness areas
// ABOUTME: Greedily fills each area's slot from a filtered, seed-shuffled drill list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time-budget allocation
//!
//! The budget is split evenly by `weaknesses.len()`, duplicates included.
//! Each slot may overflow by [`SLOT_OVERFLOW_MINUTES`]. The running budget is
//! charged the catalog duration of each emitted drill even when the emitted
//! duration was clamped, so `remaining` can drop below zero. Once it does,
//! every later weakness gets nothing.

use planner_core::models::{PlanDrill, SkillArea};
use tracing::{debug, trace};

use crate::catalog::DrillCatalog;
use crate::shuffle::seeded_shuffle;

/// Minutes a weakness slot may run over its even share
pub const SLOT_OVERFLOW_MINUTES: i64 = 5;

/// Fills a drill-time budget from the catalog
#[derive(Debug, Clone, Copy)]
pub struct DrillAllocator<'a> {
    catalog: DrillCatalog<'a>,
}

impl<'a> DrillAllocator<'a> {
    /// Create an allocator over `catalog`
    #[must_use]
    pub const fn new(catalog: DrillCatalog<'a>) -> Self {
        Self { catalog }
    }

    /// Pick drills for `weaknesses` within `target_minutes`
    ///
    /// A non-positive budget, an empty weakness list, or weaknesses with no
    /// eligible drills all produce fewer (possibly zero) drills, never an
    /// error. The shuffle seed starts at `seed` and advances by one for each
    /// weakness that has eligible drills.
    #[must_use]
    pub fn allocate(
        &self,
        weaknesses: &[SkillArea],
        rating: f64,
        is_youth: bool,
        target_minutes: i64,
        seed: i64,
    ) -> Vec<PlanDrill> {
        let Some(slot_minutes) = i64::try_from(weaknesses.len())
            .ok()
            .and_then(|count| target_minutes.checked_div_euclid(count))
        else {
            return Vec::new();
        };
        let slot_limit = slot_minutes + SLOT_OVERFLOW_MINUTES;

        let mut result = Vec::new();
        let mut remaining = target_minutes;
        let mut attempt_seed = seed;

        for &weakness in weaknesses {
            let available = self.catalog.available(weakness, rating, is_youth);
            if available.is_empty() {
                debug!(skill = %weakness, rating, is_youth, "No eligible drills, skipping weakness");
                continue;
            }

            let shuffled = seeded_shuffle(&available, attempt_seed);
            attempt_seed += 1;
            let mut allocated: i64 = 0;

            for drill in shuffled {
                let nominal = i64::from(drill.duration);
                if allocated + nominal > slot_limit || remaining <= 0 {
                    break;
                }

                // remaining is positive here, so the clamp never goes below 1
                let minutes = drill
                    .duration
                    .min(u32::try_from(remaining).unwrap_or(u32::MAX));
                trace!(drill = drill.name, minutes, remaining, "Allocated drill");
                result.push(PlanDrill::from_catalog(drill, minutes));

                allocated += nominal;
                remaining -= nominal;
            }
        }

        result
    }
}
