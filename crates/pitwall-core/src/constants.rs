use crate::vectors::BiasVector;

/// Pitwall version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of setup parameters and of bias metrics.
pub const DIMENSIONS: usize = 5;

/// Setup value at which every parameter contributes nothing beyond the initial bias.
pub const NEUTRAL_SETUP_VALUE: f64 = 0.5;

/// Linear coefficients: rows follow `BiasMetric::ALL`, columns follow `SetupParameter::ALL`.
pub const COEFFICIENTS: [[f64; DIMENSIONS]; DIMENSIONS] = [
    // front wing, rear wing, anti-roll distribution, tyre camber, toe-out
    [0.30, -0.30, 0.15, 0.05, 0.00],    // oversteer
    [0.05, 0.10, -0.10, -0.10, -0.10],  // braking stability
    [0.20, 0.20, 0.05, 0.15, 0.05],     // cornering
    [0.00, 0.25, -0.05, 0.10, 0.20],    // traction
    [-0.40, -0.50, 0.00, -0.05, -0.05], // straights
];

/// Bias produced by the all-neutral setup.
pub const INITIAL_BIAS: BiasVector = BiasVector {
    oversteer: 0.5,
    braking_stability: 0.45,
    cornering: 0.2,
    traction: 0.25,
    straights: 1.0,
};

/// Every bias metric is scored against this flat target.
pub const BIAS_TARGET: f64 = 0.5;

/// Per-metric distances at or below this carry no confidence penalty.
pub const CONFIDENCE_TOLERANCE: f64 = 0.007;
/// Confidence points lost per unit of distance.
pub const CONFIDENCE_PENALTY_SCALE: f64 = 100.0;
/// Cap on the penalty a single metric can contribute.
pub const MAX_METRIC_PENALTY: f64 = 20.0;
/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Mean-distance thresholds for OPTIMAL, GREAT and GOOD; anything else is BAD.
pub const OPTIMAL_THRESHOLD: f64 = 0.007;
pub const GREAT_THRESHOLD: f64 = 0.04;
pub const GOOD_THRESHOLD: f64 = 0.1;

/// Score points per unit of (0.5 - balance).
pub const BALANCE_WEIGHT: f64 = 20.0;
/// Score points lost per unit of bias outside [0, 1].
pub const EXTREME_PENALTY_WEIGHT: f64 = 50.0;
