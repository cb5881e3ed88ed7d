//! Step Synthesizer: one pass over the catalog, in declaration order.

use crate::catalog::RuleCatalog;
use crate::types::{Manifest, RepresentativePolicy, Step};

/// Evaluates every rule against the manifest and numbers the steps of the
/// rules that fire, starting at 1.
///
/// Total over any validated manifest. With a well-formed catalog the result
/// always holds at least the preparation and finalization steps.
pub fn synthesize(
    catalog: &RuleCatalog,
    manifest: &Manifest,
    policy: RepresentativePolicy,
) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::with_capacity(catalog.len());

    for rule in catalog.rules() {
        if !rule.applies(manifest) {
            tracing::trace!(rule = %rule.id(), "Rule skipped");
            continue;
        }
        let sequence_number = next_sequence(&steps);
        let step = rule.instantiate(sequence_number, manifest, policy);
        tracing::debug!(
            rule = %rule.id(),
            sequence_number,
            recovery_value = step.recovery_value,
            "Rule fired"
        );
        steps.push(step);
    }

    steps
}

fn next_sequence(steps: &[Step]) -> u32 {
    steps.last().map_or(1, |last| last.sequence_number + 1)
}
