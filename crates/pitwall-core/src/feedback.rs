//! Ordinal driver feedback, per metric and as a full vector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DIMENSIONS;
use crate::errors::ValidationError;
use crate::vectors::BiasMetric;

/// Qualitative rating of one bias metric. Ordered `Bad < Good < Great < Optimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackLevel {
    Bad,
    Good,
    Great,
    Optimal,
}

impl FeedbackLevel {
    pub const ALL: [FeedbackLevel; 4] = [Self::Bad, Self::Good, Self::Great, Self::Optimal];

    /// Position in the total order, starting at 0 for `Bad`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Two levels are compatible when their ordinals differ by at most one.
    /// Reflexive and symmetric.
    pub fn is_compatible_with(self, other: FeedbackLevel) -> bool {
        self.ordinal().abs_diff(other.ordinal()) <= 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "BAD",
            Self::Good => "GOOD",
            Self::Great => "GREAT",
            Self::Optimal => "OPTIMAL",
        }
    }
}

impl fmt::Display for FeedbackLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bad" => Ok(Self::Bad),
            "good" => Ok(Self::Good),
            "great" => Ok(Self::Great),
            "optimal" => Ok(Self::Optimal),
            _ => Err(ValidationError::UnknownFeedbackLevel {
                input: s.to_string(),
            }),
        }
    }
}

/// One feedback level per bias metric, as reported after a practice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackVector {
    pub oversteer: FeedbackLevel,
    pub braking_stability: FeedbackLevel,
    pub cornering: FeedbackLevel,
    pub traction: FeedbackLevel,
    pub straights: FeedbackLevel,
}

impl FeedbackVector {
    /// Same level for every metric.
    pub fn uniform(level: FeedbackLevel) -> Self {
        Self::from_array([level; DIMENSIONS])
    }

    pub fn from_array(levels: [FeedbackLevel; DIMENSIONS]) -> Self {
        let [oversteer, braking_stability, cornering, traction, straights] = levels;
        Self {
            oversteer,
            braking_stability,
            cornering,
            traction,
            straights,
        }
    }

    /// Levels in `BiasMetric::ALL` order.
    pub fn to_array(&self) -> [FeedbackLevel; DIMENSIONS] {
        [
            self.oversteer,
            self.braking_stability,
            self.cornering,
            self.traction,
            self.straights,
        ]
    }

    pub fn get(&self, metric: BiasMetric) -> FeedbackLevel {
        self.to_array()[metric.index()]
    }

    /// Compatible only when every metric is compatible.
    pub fn is_compatible_with(&self, other: &FeedbackVector) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.is_compatible_with(*b))
    }
}

impl fmt::Display for FeedbackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OS {} BRK {} CRN {} TRC {} STR {}",
            self.oversteer, self.braking_stability, self.cornering, self.traction, self.straights
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        assert!(FeedbackLevel::Bad < FeedbackLevel::Good);
        assert!(FeedbackLevel::Good < FeedbackLevel::Great);
        assert!(FeedbackLevel::Great < FeedbackLevel::Optimal);
    }

    #[test]
    fn good_is_compatible_with_neighbours_only() {
        let good = FeedbackLevel::Good;
        assert!(good.is_compatible_with(FeedbackLevel::Bad));
        assert!(good.is_compatible_with(FeedbackLevel::Good));
        assert!(good.is_compatible_with(FeedbackLevel::Great));
        assert!(!good.is_compatible_with(FeedbackLevel::Optimal));
    }

    #[test]
    fn compatibility_is_reflexive_and_symmetric() {
        for a in FeedbackLevel::ALL {
            assert!(a.is_compatible_with(a));
            for b in FeedbackLevel::ALL {
                assert_eq!(a.is_compatible_with(b), b.is_compatible_with(a));
            }
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Great".parse::<FeedbackLevel>().unwrap(), FeedbackLevel::Great);
        assert_eq!(" OPTIMAL ".parse::<FeedbackLevel>().unwrap(), FeedbackLevel::Optimal);
        assert!("meh".parse::<FeedbackLevel>().is_err());
    }

    #[test]
    fn vector_requires_every_metric_compatible() {
        let submitted = FeedbackVector::uniform(FeedbackLevel::Good);
        let mut candidate = FeedbackVector::uniform(FeedbackLevel::Great);
        assert!(candidate.is_compatible_with(&submitted));
        candidate.straights = FeedbackLevel::Optimal;
        assert!(!candidate.is_compatible_with(&submitted));
    }
}
