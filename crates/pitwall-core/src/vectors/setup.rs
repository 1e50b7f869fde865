use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DIMENSIONS, NEUTRAL_SETUP_VALUE};
use crate::errors::ValidationError;

/// One of the five tunable car parameters, in coefficient-matrix column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupParameter {
    FrontWing,
    RearWing,
    AntiRollDistribution,
    TyreCamber,
    ToeOut,
}

impl SetupParameter {
    pub const ALL: [SetupParameter; DIMENSIONS] = [
        Self::FrontWing,
        Self::RearWing,
        Self::AntiRollDistribution,
        Self::TyreCamber,
        Self::ToeOut,
    ];

    /// Column index in the coefficient matrix.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FrontWing => "front_wing",
            Self::RearWing => "rear_wing",
            Self::AntiRollDistribution => "anti_roll_distribution",
            Self::TyreCamber => "tyre_camber",
            Self::ToeOut => "toe_out",
        }
    }
}

impl fmt::Display for SetupParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate car configuration. Each value is normalized to [0.0, 1.0].
///
/// Construction does not validate; the bias model accepts any value and
/// callers that take user input check with [`SetupVector::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupVector {
    pub front_wing: f64,
    pub rear_wing: f64,
    pub anti_roll_distribution: f64,
    pub tyre_camber: f64,
    pub toe_out: f64,
}

impl SetupVector {
    /// Every parameter at the middle of its range.
    pub const NEUTRAL: SetupVector = SetupVector {
        front_wing: NEUTRAL_SETUP_VALUE,
        rear_wing: NEUTRAL_SETUP_VALUE,
        anti_roll_distribution: NEUTRAL_SETUP_VALUE,
        tyre_camber: NEUTRAL_SETUP_VALUE,
        toe_out: NEUTRAL_SETUP_VALUE,
    };

    pub fn new(
        front_wing: f64,
        rear_wing: f64,
        anti_roll_distribution: f64,
        tyre_camber: f64,
        toe_out: f64,
    ) -> Self {
        Self {
            front_wing,
            rear_wing,
            anti_roll_distribution,
            tyre_camber,
            toe_out,
        }
    }

    /// Every parameter set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self::from_array([value; DIMENSIONS])
    }

    pub fn from_array(values: [f64; DIMENSIONS]) -> Self {
        let [front_wing, rear_wing, anti_roll_distribution, tyre_camber, toe_out] = values;
        Self::new(front_wing, rear_wing, anti_roll_distribution, tyre_camber, toe_out)
    }

    /// Values in `SetupParameter::ALL` order.
    pub fn to_array(&self) -> [f64; DIMENSIONS] {
        [
            self.front_wing,
            self.rear_wing,
            self.anti_roll_distribution,
            self.tyre_camber,
            self.toe_out,
        ]
    }

    pub fn get(&self, parameter: SetupParameter) -> f64 {
        self.to_array()[parameter.index()]
    }

    /// Copy with one parameter replaced.
    pub fn with(&self, parameter: SetupParameter, value: f64) -> Self {
        let mut values = self.to_array();
        values[parameter.index()] = value;
        Self::from_array(values)
    }

    /// Copy with every parameter clamped into [0.0, 1.0].
    pub fn clamped(&self) -> Self {
        Self::from_array(self.to_array().map(|v| v.clamp(0.0, 1.0)))
    }

    /// Reject non-finite values and values outside [0.0, 1.0].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for parameter in SetupParameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    parameter: parameter.name(),
                });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    parameter: parameter.name(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for SetupVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for SetupVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FW {:.3} RW {:.3} ARD {:.3} CAM {:.3} TOE {:.3}",
            self.front_wing,
            self.rear_wing,
            self.anti_roll_distribution,
            self.tyre_camber,
            self.toe_out
        )
    }
}
