// ABOUTME: Skill area enumeration for pickleball technique categories
// ABOUTME: Defines the fixed set of weaknesses a player can select, with parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pickleball technique categories used to tag drills and player weaknesses
///
/// Serialized as the lowercase identifier (`"dinking"`, `"drops"`, ...), which
/// is also the text used in plan overviews and day focus labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillArea {
    /// Soft kitchen-to-kitchen exchanges
    Dinking,
    /// Drives and power shots
    Drives,
    /// Serves and returns
    Serves,
    /// Volleys at the kitchen line
    Volleys,
    /// Third shot drops
    Drops,
    /// Lobs and overheads
    Lobs,
    /// Footwork and positioning
    Footwork,
    /// Game strategy
    Strategy,
    /// Transition zone play
    Transitions,
    /// Resets and defense
    Resets,
}

impl SkillArea {
    /// Every skill area in declaration order
    pub const ALL: [Self; 10] = [
        Self::Dinking,
        Self::Drives,
        Self::Serves,
        Self::Volleys,
        Self::Drops,
        Self::Lobs,
        Self::Footwork,
        Self::Strategy,
        Self::Transitions,
        Self::Resets,
    ];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dinking => "dinking",
            Self::Drives => "drives",
            Self::Serves => "serves",
            Self::Volleys => "volleys",
            Self::Drops => "drops",
            Self::Lobs => "lobs",
            Self::Footwork => "footwork",
            Self::Strategy => "strategy",
            Self::Transitions => "transitions",
            Self::Resets => "resets",
        }
    }

    /// Display label shown in the profile wizard
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dinking => "Dinking",
            Self::Drives => "Drives & Power",
            Self::Serves => "Serves & Returns",
            Self::Volleys => "Volleys",
            Self::Drops => "Third Shot Drops",
            Self::Lobs => "Lobs & Overheads",
            Self::Footwork => "Footwork & Positioning",
            Self::Strategy => "Game Strategy",
            Self::Transitions => "Transition Zone",
            Self::Resets => "Resets & Defense",
        }
    }
}

impl fmt::Display for SkillArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known skill identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill area: {0}")]
pub struct UnknownSkillArea(pub String);

impl FromStr for SkillArea {
    type Err = UnknownSkillArea;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| UnknownSkillArea(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_identifier() {
        for skill in SkillArea::ALL {
            assert_eq!(skill.as_str().parse::<SkillArea>(), Ok(skill));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Dinking".parse::<SkillArea>().is_err());
        assert_eq!(
            "smashing".parse::<SkillArea>(),
            Err(UnknownSkillArea("smashing".to_owned()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_identifier() {
        let json = serde_json::to_string(&SkillArea::Transitions).unwrap();
        assert_eq!(json, "\"transitions\"");
        let parsed: SkillArea = serde_json::from_str("\"resets\"").unwrap();
        assert_eq!(parsed, SkillArea::Resets);
    }
}
