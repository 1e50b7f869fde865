use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DIMENSIONS;

/// One of the five derived handling characteristics, in coefficient-matrix row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasMetric {
    Oversteer,
    BrakingStability,
    Cornering,
    Traction,
    Straights,
}

impl BiasMetric {
    pub const ALL: [BiasMetric; DIMENSIONS] = [
        Self::Oversteer,
        Self::BrakingStability,
        Self::Cornering,
        Self::Traction,
        Self::Straights,
    ];

    /// Row index in the coefficient matrix.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Oversteer => "oversteer",
            Self::BrakingStability => "braking_stability",
            Self::Cornering => "cornering",
            Self::Traction => "traction",
            Self::Straights => "straights",
        }
    }
}

impl fmt::Display for BiasMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handling bias derived from a setup. Unbounded; never set directly by users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasVector {
    pub oversteer: f64,
    pub braking_stability: f64,
    pub cornering: f64,
    pub traction: f64,
    pub straights: f64,
}

impl BiasVector {
    pub fn from_array(values: [f64; DIMENSIONS]) -> Self {
        let [oversteer, braking_stability, cornering, traction, straights] = values;
        Self {
            oversteer,
            braking_stability,
            cornering,
            traction,
            straights,
        }
    }

    /// Values in `BiasMetric::ALL` order.
    pub fn to_array(&self) -> [f64; DIMENSIONS] {
        [
            self.oversteer,
            self.braking_stability,
            self.cornering,
            self.traction,
            self.straights,
        ]
    }

    pub fn get(&self, metric: BiasMetric) -> f64 {
        self.to_array()[metric.index()]
    }

    /// Copy with one metric replaced.
    pub fn with(&self, metric: BiasMetric, value: f64) -> Self {
        let mut values = self.to_array();
        values[metric.index()] = value;
        Self::from_array(values)
    }
}

impl fmt::Display for BiasVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OS {:.3} BRK {:.3} CRN {:.3} TRC {:.3} STR {:.3}",
            self.oversteer, self.braking_stability, self.cornering, self.traction, self.straights
        )
    }
}
