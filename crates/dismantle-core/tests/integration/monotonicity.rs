//! Adding a component can only add the steps of rules it newly satisfies.

use dismantle_core::{ManifestLoader, RuleCatalog};
use std::collections::HashSet;

use crate::common::{generate, manifest};

fn fired(components: &[(&str, f64, &str)]) -> HashSet<String> {
    generate(&manifest(components))
        .steps
        .iter()
        .map(|s| s.rule.to_string())
        .collect()
}

#[test]
fn test_single_rule_classes_add_exactly_one_step() {
    let base: &[(&str, f64, &str)] = &[("fan", 0.1, "aluminium")];
    let before = fired(base);

    for (addition, rule) in [
        (("display", 0.5, "verre"), "separate-display"),
        (("cabling", 0.1, "cuivre"), "recover-cabling"),
        (("keyboard", 0.3, "silicone"), "separate-input-devices"),
        (("casing", 0.8, "abs-polycarbonate"), "sort-plastics"),
        (("ssd", 0.05, "metaux"), "extract-internals"),
    ] {
        let mut components = base.to_vec();
        components.push(addition);
        let after = fired(&components);
        assert_eq!(after.len(), before.len() + 1, "adding {addition:?}");
        let new: Vec<_> = after.difference(&before).collect();
        assert_eq!(new, vec![rule]);
    }
}

#[test]
fn test_added_steps_equal_newly_satisfied_rules() {
    let catalog = RuleCatalog::standard();
    let base = manifest(&[("casing", 1.0, "acier")]);
    let extended = manifest(&[("casing", 1.0, "acier"), ("battery", 0.3, "lithium-ion")]);

    let newly_satisfied = catalog
        .rules()
        .iter()
        .filter(|rule| rule.applies(&extended) && !rule.applies(&base))
        .count();

    let before = generate(&base).steps.len();
    let after = generate(&extended).steps.len();
    assert_eq!(after - before, newly_satisfied);
    assert_eq!(newly_satisfied, 2);
}

#[test]
fn test_duplicate_class_adds_nothing() {
    let laptop = generate(&ManifestLoader::canonical_example());
    let mut components: Vec<(&str, f64, &str)> = vec![
        ("battery", 0.3, "lithium-ion"),
        ("display", 0.5, "verre-plastique"),
        ("logic board", 0.2, "pcb-metaux"),
        ("storage", 0.15, "metaux-plastique"),
        ("casing", 0.8, "abs-polycarbonate"),
        ("keyboard", 0.3, "plastique-silicone"),
        ("cabling", 0.1, "cuivre-plastique"),
    ];
    components.push(("second battery", 0.4, "lithium-ion"));
    components.push(("hdmi cable", 0.05, "cuivre-plastique"));

    let extended = generate(&manifest(&components));
    assert_eq!(extended.steps.len(), laptop.steps.len());
}
