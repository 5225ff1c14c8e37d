// ABOUTME: Warm-up and cool-down timing and routines by rating tier and youth flag
// ABOUTME: Pure lookups; youth always takes precedence over the rating tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session overhead in minutes
pub mod minutes {
    /// Warm-up for youth players
    pub const YOUTH_WARMUP: u32 = 7;
    /// Warm-up below the advanced tier
    pub const STANDARD_WARMUP: u32 = 8;
    /// Warm-up for advanced players
    pub const ADVANCED_WARMUP: u32 = 10;
    /// Cool-down for youth players
    pub const YOUTH_COOLDOWN: u32 = 8;
    /// Cool-down for everyone else
    pub const STANDARD_COOLDOWN: u32 = 5;
}

/// Rating tier boundaries
pub mod tiers {
    /// Below this, beginner warm-up
    pub const BEGINNER_WARMUP_BELOW: f64 = 3.0;
    /// From this rating up, the longer advanced warm-up
    pub const ADVANCED_WARMUP_FROM: f64 = 4.0;
    /// Below this, light cool-down
    pub const LIGHT_COOLDOWN_BELOW: f64 = 3.5;
}

const YOUTH_WARMUP_TEXT: &str = "5 min dynamic stretching: arm circles, leg swings, high knees, side shuffles. Then 2 min cooperative rally to get loose.";
const BEGINNER_WARMUP_TEXT: &str = "5 min light rally: hit easy forehand-to-forehand. Focus on making contact and getting loose.";
const MID_WARMUP_TEXT: &str = "5 min dynamic warm-up: arm circles, leg swings, lateral shuffles. Then 3 min cooperative dink rally.";
const ADVANCED_WARMUP_TEXT: &str = "5 min dynamic warm-up: band work for shoulders, lateral shuffles, split step practice. Then 5 min progressive dinking (slow, medium, fast).";

const YOUTH_COOLDOWN_TEXT: &str =
    "3 min easy rally for fun. 5 min stretching: quads, hamstrings, shoulders, wrists.";
const LIGHT_COOLDOWN_TEXT: &str =
    "5 min light stretching: shoulders, wrists, quads, hamstrings. Hydrate!";
const ADVANCED_COOLDOWN_TEXT: &str = "5 min static stretching: hip flexors, shoulders, forearms, calves. Foam roll if available. Log what went well and what needs work.";

/// Warm-up length for the profile
#[must_use]
pub fn warmup_minutes(rating: f64, is_youth: bool) -> u32 {
    if is_youth {
        minutes::YOUTH_WARMUP
    } else if rating < tiers::ADVANCED_WARMUP_FROM {
        minutes::STANDARD_WARMUP
    } else {
        minutes::ADVANCED_WARMUP
    }
}

/// Cool-down length for the profile
#[must_use]
pub const fn cooldown_minutes(is_youth: bool) -> u32 {
    if is_youth {
        minutes::YOUTH_COOLDOWN
    } else {
        minutes::STANDARD_COOLDOWN
    }
}

/// Warm-up routine for the profile
#[must_use]
pub fn warmup_routine(rating: f64, is_youth: bool) -> &'static str {
    if is_youth {
        YOUTH_WARMUP_TEXT
    } else if rating < tiers::BEGINNER_WARMUP_BELOW {
        BEGINNER_WARMUP_TEXT
    } else if rating < tiers::ADVANCED_WARMUP_FROM {
        MID_WARMUP_TEXT
    } else {
        ADVANCED_WARMUP_TEXT
    }
}

/// Cool-down routine for the profile
#[must_use]
pub fn cooldown_routine(rating: f64, is_youth: bool) -> &'static str {
    if is_youth {
        YOUTH_COOLDOWN_TEXT
    } else if rating < tiers::LIGHT_COOLDOWN_BELOW {
        LIGHT_COOLDOWN_TEXT
    } else {
        ADVANCED_COOLDOWN_TEXT
    }
}
