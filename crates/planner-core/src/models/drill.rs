// ABOUTME: Drill catalog entry with rating band, skill tag, and youth suitability
// ABOUTME: Immutable records built at compile time and shared across every plan request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::SkillArea;

/// A single practice drill from the reference catalog
///
/// Fields are `&'static str` so the whole catalog can live in a `static`
/// slice with no allocation or initialization order concerns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drill {
    /// Unique name within the catalog
    pub name: &'static str,
    /// What the player does
    pub description: &'static str,
    /// Optional coaching cue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching_tip: Option<&'static str>,
    /// Optional harder or alternate version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<&'static str>,
    /// Nominal length in minutes, always positive
    pub duration: u32,
    /// Skill area this drill trains
    pub skill: SkillArea,
    /// Lowest DUPR rating the drill suits (inclusive)
    #[serde(rename = "minRating")]
    pub min_rating: f64,
    /// Highest DUPR rating the drill suits (inclusive)
    #[serde(rename = "maxRating")]
    pub max_rating: f64,
    /// Whether the drill is appropriate for youth players
    #[serde(rename = "youthFriendly")]
    pub youth_friendly: bool,
}

impl Drill {
    /// Whether `rating` falls within this drill's inclusive rating band
    #[must_use]
    pub fn suits_rating(&self, rating: f64) -> bool {
        self.min_rating <= rating && rating <= self.max_rating
    }

    /// Whether this drill may be shown to a player with the given youth flag
    #[must_use]
    pub const fn suits_audience(&self, is_youth: bool) -> bool {
        !is_youth || self.youth_friendly
    }
}
