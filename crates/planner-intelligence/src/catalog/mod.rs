// ABOUTME: Read-only drill catalog with skill, rating band, and audience filtering
// ABOUTME: Wraps the built-in reference drills or any caller-supplied drill slice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Drill catalog and eligibility filter
//!
//! The catalog is a borrowed slice, so it is `Copy` and can be handed to
//! every request handler without locking. Nothing in the crate mutates it.

mod drills;

pub use drills::BUILTIN_DRILLS;

use planner_core::models::{Drill, SkillArea};

/// Immutable view over an ordered set of drills
#[derive(Debug, Clone, Copy)]
pub struct DrillCatalog<'a> {
    drills: &'a [Drill],
}

impl Default for DrillCatalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DrillCatalog<'static> {
    /// The built-in reference catalog
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            drills: BUILTIN_DRILLS,
        }
    }
}

impl<'a> DrillCatalog<'a> {
    /// Wrap a caller-supplied drill list
    #[must_use]
    pub const fn new(drills: &'a [Drill]) -> Self {
        Self { drills }
    }

    /// All drills in declaration order
    #[must_use]
    pub const fn drills(&self) -> &'a [Drill] {
        self.drills
    }

    /// Number of drills in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.drills.len()
    }

    /// Whether the catalog holds no drills
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.drills.is_empty()
    }

    /// Look a drill up by its unique name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'a Drill> {
        self.drills.iter().find(|drill| drill.name == name)
    }

    /// Drills that train `skill`, suit `rating`, and are allowed for the audience
    ///
    /// Order follows the catalog. An empty result is normal: callers skip the
    /// skill rather than treating it as an error.
    #[must_use]
    pub fn available(&self, skill: SkillArea, rating: f64, is_youth: bool) -> Vec<&'a Drill> {
        self.drills
            .iter()
            .filter(|drill| {
                drill.skill == skill && drill.suits_rating(rating) && drill.suits_audience(is_youth)
            })
            .collect()
    }

    /// Every drill tagged with `skill`, ignoring rating and audience
    #[must_use]
    pub fn for_skill(&self, skill: SkillArea) -> Vec<&'a Drill> {
        self.drills
            .iter()
            .filter(|drill| drill.skill == skill)
            .collect()
    }

    /// Listing filter where each supplied criterion narrows the result
    ///
    /// With both `skill` and `rating` this is [`Self::available`].
    #[must_use]
    pub fn matching(
        &self,
        skill: Option<SkillArea>,
        rating: Option<f64>,
        is_youth: bool,
    ) -> Vec<&'a Drill> {
        self.drills
            .iter()
            .filter(|drill| skill.is_none_or(|skill| drill.skill == skill))
            .filter(|drill| rating.is_none_or(|rating| drill.suits_rating(rating)))
            .filter(|drill| drill.suits_audience(is_youth))
            .collect()
    }
}
