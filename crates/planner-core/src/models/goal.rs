// ABOUTME: Training goal enumeration driving the weekly tip of a practice plan
// ABOUTME: Lenient parsing falls back to the competitive goal for unknown identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the player wants out of the week of practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Playing for fun
    Recreational,
    /// Tournament play
    #[default]
    Competitive,
    /// Raising a DUPR rating
    Rating,
    /// Youth player development
    Youth,
}

impl Goal {
    /// Every goal in declaration order
    pub const ALL: [Self; 4] = [
        Self::Recreational,
        Self::Competitive,
        Self::Rating,
        Self::Youth,
    ];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recreational => "recreational",
            Self::Competitive => "competitive",
            Self::Rating => "rating",
            Self::Youth => "youth",
        }
    }

    /// Display label shown in the profile wizard
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recreational => "Get better for fun",
            Self::Competitive => "Win more tournaments",
            Self::Rating => "Increase my DUPR rating",
            Self::Youth => "Youth player development",
        }
    }

    /// Parse from string with fallback to [`Goal::Competitive`]
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .unwrap_or_default()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
