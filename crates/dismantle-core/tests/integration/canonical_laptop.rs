//! End-to-end checks on the canonical laptop manifest.

use dismantle_core::{Engine, ManifestLoader, Priority};

use crate::common::{assert_close, step_for};

#[test]
fn test_canonical_laptop_summary() {
    let report = Engine::default()
        .run(None)
        .expect("canonical manifest should generate");
    let summary = &report.summary;

    assert_eq!(summary.total_steps, 10);
    assert_eq!(summary.total_time_minutes, 56);
    assert_close(summary.total_mass_kg, 2.35);
    assert_close(summary.recoverable_mass_ratio, 0.85);
    assert_close(summary.total_recovery_value, 62.1);
}

#[test]
fn test_canonical_laptop_step_values() {
    let report = Engine::default().generate(&ManifestLoader::canonical_example());

    let expected = [
        ("prepare-workspace", 3, 0.0),
        ("discharge-power", 6, 0.0),
        ("extract-battery", 4, 4.5),
        ("separate-display", 8, 4.0),
        ("extract-internals", 7, 25.0),
        ("extract-mainboard", 10, 10.0),
        ("recover-cabling", 3, 1.2),
        ("separate-input-devices", 5, 5.0),
        ("sort-plastics", 6, 2.4),
        ("final-sort", 4, 10.0),
    ];

    assert_eq!(report.steps.len(), expected.len());
    for (i, (step, (rule, minutes, value))) in report.steps.iter().zip(expected).enumerate() {
        assert_eq!(step.sequence_number as usize, i + 1);
        assert_eq!(step.rule.as_str(), rule);
        assert_eq!(step.estimated_minutes, minutes, "minutes of {rule}");
        assert_close(step.recovery_value, value);
    }
}

#[test]
fn test_canonical_laptop_streams() {
    let report = Engine::default().generate(&ManifestLoader::canonical_example());
    assert_eq!(
        report.summary.distinct_output_streams,
        vec![
            "battery-recycling",
            "display-recycling",
            "electronic-components",
            "precious-metals-recovery",
            "copper-recovery",
            "input-device-recovery",
            "plastics-recycling",
            "quality-control",
        ]
    );
}

#[test]
fn test_battery_steps_are_critical() {
    let report = Engine::default().generate(&ManifestLoader::canonical_example());
    for rule in ["discharge-power", "extract-battery"] {
        let step = step_for(&report, rule).expect("battery rule should fire");
        assert_eq!(step.priority, Priority::Critical);
        assert!(!step.ppe.is_empty());
    }
    let prep = step_for(&report, "prepare-workspace").unwrap();
    assert!(!prep.priority.is_hazardous());
}

#[test]
fn test_tools_and_ppe_have_no_duplicates() {
    let report = Engine::default().generate(&ManifestLoader::canonical_example());
    for step in &report.steps {
        let mut tools = step.tools.clone();
        tools.sort();
        tools.dedup();
        assert_eq!(tools.len(), step.tools.len(), "tools of {}", step.rule);

        let mut ppe = step.ppe.clone();
        ppe.sort();
        ppe.dedup();
        assert_eq!(ppe.len(), step.ppe.len(), "ppe of {}", step.rule);
    }
}

#[test]
fn test_report_json_round_trip() {
    let report = Engine::default().generate(&ManifestLoader::canonical_example());
    let json = serde_json::to_string(&report).unwrap();
    let parsed: dismantle_core::Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
