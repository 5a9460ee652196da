use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ADVANCED_THRESHOLD: f64 = 7.5;
pub const INTERMEDIATE_THRESHOLD: f64 = 4.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyBand {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyBand {
    /// Maps an average score on the 0-10 scale onto a band.
    pub fn from_average(avg_score: f64) -> Self {
        if avg_score >= ADVANCED_THRESHOLD {
            ProficiencyBand::Advanced
        } else if avg_score >= INTERMEDIATE_THRESHOLD {
            ProficiencyBand::Intermediate
        } else {
            ProficiencyBand::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyBand::Beginner => "beginner",
            ProficiencyBand::Intermediate => "intermediate",
            ProficiencyBand::Advanced => "advanced",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            ProficiencyBand::Beginner => "foundational concepts, definitions, simple examples",
            ProficiencyBand::Intermediate => {
                "practical usage, common patterns, debugging scenarios"
            }
            ProficiencyBand::Advanced => {
                "deep architecture, design patterns, edge cases, trade-offs"
            }
        }
    }
}

impl FromStr for ProficiencyBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ProficiencyBand::Beginner),
            "intermediate" => Ok(ProficiencyBand::Intermediate),
            "advanced" => Ok(ProficiencyBand::Advanced),
            other => Err(format!("Invalid proficiency band: {}", other)),
        }
    }
}

impl fmt::Display for ProficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
