//! Golden fixture loader shared by the Pitwall crates' tests.
//!
//! Fixture JSON lives under `data/` inside this crate.

use std::path::PathBuf;

use pitwall_core::{BiasVector, FeedbackLevel, FeedbackVector, SetupVector};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Path of the reference setups fixture, relative to the data root.
pub const REFERENCE_SETUPS: &str = "golden/reference_setups.json";

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A setup with independently computed expectations for every derived value.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceSetup {
    pub name: String,
    pub setup: SetupVector,
    pub expected_bias: BiasVector,
    pub expected_confidence: f64,
    pub expected_feedback: FeedbackVector,
    pub expected_overall: FeedbackLevel,
    pub expected_score: f64,
}

/// All golden reference setups.
pub fn reference_setups() -> Vec<ReferenceSetup> {
    load_fixture(REFERENCE_SETUPS)
}

/// Look up one reference setup by name.
///
/// # Panics
/// Panics if no fixture has that name.
pub fn reference_setup(name: &str) -> ReferenceSetup {
    reference_setups()
        .into_iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no reference setup named {name}"))
}
