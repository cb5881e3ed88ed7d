//! Loader behavior through the public API.

use dismantle_core::{ComponentClass, Engine, Error, ManifestLoader};
use std::io::Write;

use crate::common::assert_close;

#[test]
fn test_empty_components_yield_two_steps() {
    let report = Engine::default()
        .generate(&ManifestLoader::from_json_str(r#"{"category": "it", "components": []}"#).unwrap());

    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[0].rule.as_str(), "prepare-workspace");
    assert_eq!(report.steps[1].rule.as_str(), "final-sort");
    assert_eq!(report.summary.total_mass_kg, 0.0);
    assert_eq!(report.summary.recoverable_mass_ratio, 0.0);
    assert_eq!(report.summary.total_time_minutes, 7);
    assert_close(report.summary.total_recovery_value, 10.0);
    assert_eq!(report.summary.distinct_output_streams, vec!["quality-control"]);
}

#[test]
fn test_absent_components_is_validation_error() {
    let err = ManifestLoader::from_json_str(r#"{"category": "it"}"#).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(err.field(), Some("components"));
}

#[test]
fn test_negative_mass_aborts_generation() {
    let json = r#"{"components": [
        {"kind": "battery", "mass_kg": 0.3, "material_descriptor": "lithium-ion"},
        {"kind": "casing", "mass_kg": -2, "material_descriptor": "abs"}
    ]}"#;
    let err = ManifestLoader::from_json_str(json).unwrap_err();
    assert_eq!(err.field(), Some("components[1].mass_kg"));
}

#[test]
fn test_parse_error_is_reported_verbatim() {
    let source = "{ not json";
    let expected = serde_json::from_str::<serde_json::Value>(source)
        .unwrap_err()
        .to_string();
    let err = ManifestLoader::from_json_str(source).unwrap_err();
    let Error::Parse { message, .. } = err else {
        unreachable!("Expected Parse error");
    };
    assert_eq!(message, expected);
}

#[test]
fn test_from_path_json_and_toml() {
    let dir = tempfile::TempDir::new().unwrap();

    let json_path = dir.path().join("phone.json");
    let mut file = std::fs::File::create(&json_path).unwrap();
    write!(
        file,
        r#"{{"category": "it", "subcategory": "phone", "components": [
            {{"kind": "Batterie", "mass_kg": "0,05", "material_descriptor": "lithium-polymere"}}
        ]}}"#
    )
    .unwrap();
    let phone = ManifestLoader::from_path(&json_path).unwrap();
    assert_eq!(phone.components()[0].class(), ComponentClass::Battery);
    assert_close(phone.components()[0].mass_kg(), 0.05);

    let toml_path = dir.path().join("router.toml");
    std::fs::write(
        &toml_path,
        "category = \"network\"\n\n[[components]]\nkind = \"boitier\"\nmass_kg = 0.4\nmaterial_descriptor = \"abs\"\n",
    )
    .unwrap();
    let router = ManifestLoader::from_path(&toml_path).unwrap();
    assert_eq!(router.components()[0].class(), ComponentClass::Casing);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let err = ManifestLoader::from_path("/nonexistent/device.json").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn test_from_path_unknown_extension() {
    let err = ManifestLoader::from_path("device.xml").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}
