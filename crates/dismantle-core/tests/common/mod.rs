//! Shared fixtures for engine integration tests.

use dismantle_core::{ComponentInput, Engine, Manifest, ManifestInput, ManifestLoader, Report, Step};

/// Tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Builds a raw manifest from (kind, mass, material) triples.
pub fn input(components: &[(&str, f64, &str)]) -> ManifestInput {
    ManifestInput {
        category: "it-equipment".to_string(),
        subcategory: "test-device".to_string(),
        components: Some(
            components
                .iter()
                .map(|(kind, mass, material)| ComponentInput::new(*kind, *mass, *material))
                .collect(),
        ),
    }
}

/// Builds a validated manifest from (kind, mass, material) triples.
pub fn manifest(components: &[(&str, f64, &str)]) -> Manifest {
    ManifestLoader::from_input(&input(components)).expect("fixture manifest should be valid")
}

/// Runs the default engine over a manifest.
pub fn generate(manifest: &Manifest) -> Report {
    Engine::default().generate(manifest)
}

/// Finds the step produced by a given rule.
pub fn step_for<'a>(report: &'a Report, rule: &str) -> Option<&'a Step> {
    report.steps.iter().find(|s| s.rule.as_str() == rule)
}

/// Asserts two floats are equal within [`EPSILON`].
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
