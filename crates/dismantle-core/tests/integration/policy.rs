//! First-match versus aggregate-all representative selection.

use dismantle_core::{Engine, RepresentativePolicy, RuleCatalog};

use crate::common::{assert_close, manifest, step_for};

fn two_displays() -> dismantle_core::Manifest {
    manifest(&[
        ("display", 0.5, "verre"),
        ("secondary display", 0.25, "verre"),
        ("cable", 0.1, "cuivre-plastique"),
        ("cable", 0.3, "cuivre-plastique"),
    ])
}

#[test]
fn test_first_match_uses_earliest_component() {
    let report = Engine::default().generate(&two_displays());
    assert_close(step_for(&report, "separate-display").unwrap().recovery_value, 4.0);
    assert_close(step_for(&report, "recover-cabling").unwrap().recovery_value, 1.2);
}

#[test]
fn test_aggregate_all_sums_matching_components() {
    let engine = Engine::new(RuleCatalog::standard(), RepresentativePolicy::AggregateAll);
    let report = engine.generate(&two_displays());
    assert_close(step_for(&report, "separate-display").unwrap().recovery_value, 6.0);
    assert_close(step_for(&report, "recover-cabling").unwrap().recovery_value, 4.8);
}

#[test]
fn test_policies_agree_on_step_count_and_plastics() {
    let m = two_displays();
    let first = Engine::default().generate(&m);
    let all = Engine::default()
        .with_policy(RepresentativePolicy::AggregateAll)
        .generate(&m);
    assert_eq!(first.summary.total_steps, all.summary.total_steps);
    assert_eq!(first.summary.total_time_minutes, all.summary.total_time_minutes);
    assert_close(
        step_for(&first, "sort-plastics").unwrap().recovery_value,
        step_for(&all, "sort-plastics").unwrap().recovery_value,
    );
}
