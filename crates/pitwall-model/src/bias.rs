use pitwall_core::constants::{COEFFICIENTS, DIMENSIONS, INITIAL_BIAS, NEUTRAL_SETUP_VALUE};
use pitwall_core::{BiasVector, SetupVector};

/// Linear bias model.
///
/// ```text
/// bias[m] = initialBias[m] + Σ_p coefficients[m][p] × (setup[p] − 0.5)
/// ```
///
/// No clamping: values outside [0, 1] go through the same formula. The
/// neutral setup yields `INITIAL_BIAS` exactly because every offset is 0.
pub fn compute_bias(setup: &SetupVector) -> BiasVector {
    let offsets = setup.to_array().map(|v| v - NEUTRAL_SETUP_VALUE);
    let initial = INITIAL_BIAS.to_array();

    let mut bias = [0.0; DIMENSIONS];
    for (m, row) in COEFFICIENTS.iter().enumerate() {
        let delta: f64 = row.iter().zip(offsets.iter()).map(|(c, o)| c * o).sum();
        bias[m] = initial[m] + delta;
    }
    BiasVector::from_array(bias)
}
