#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// Finishing transformation applied to the base syllable string
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CadenceMode {
    /// Soft "~" tail
    Calm,
    /// One to three "!" depending on echo count
    #[default]
    Excited,
    /// Uppercase base with a fixed "!!!" tail
    Chaotic,
}

impl CadenceMode {
    /// Display order of the cadence buttons
    pub const ALL: [CadenceMode; 3] = [CadenceMode::Calm, CadenceMode::Excited, CadenceMode::Chaotic];

    const NAMES: &'static [&'static str] = &["calm", "excited", "chaotic"];

    pub fn name(self) -> &'static str {
        match self {
            CadenceMode::Calm => "calm",
            CadenceMode::Excited => "excited",
            CadenceMode::Chaotic => "chaotic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CadenceMode::Calm => "Calm cadence",
            CadenceMode::Excited => "Excited cadence",
            CadenceMode::Chaotic => "Chaotic cadence",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CadenceMode::Calm => "Soft echo with a mellow finish.",
            CadenceMode::Excited => "Adds joyful emphasis and sparkle.",
            CadenceMode::Chaotic => "All caps with punchy syncopation.",
        }
    }

    /// Next mode in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            CadenceMode::Calm => CadenceMode::Excited,
            CadenceMode::Excited => CadenceMode::Chaotic,
            CadenceMode::Chaotic => CadenceMode::Calm,
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            CadenceMode::Calm => 0,
            CadenceMode::Excited => 1,
            CadenceMode::Chaotic => 2,
        }
    }
}

impl std::fmt::Display for CadenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CadenceMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calm" => Ok(CadenceMode::Calm),
            "excited" => Ok(CadenceMode::Excited),
            "chaotic" => Ok(CadenceMode::Chaotic),
            _ => Err(ParseNameError::Unknown {
                kind: "cadence",
                input: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
