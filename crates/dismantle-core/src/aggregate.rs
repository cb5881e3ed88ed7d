//! Aggregate Calculator: summary metrics over a synthesized procedure.

use crate::types::{Manifest, Step, Summary};
use crate::util::round_to;

/// Share of device mass treated as recoverable.
///
/// Applied uniformly, whatever the material mix. A composition-aware
/// estimate would replace this constant rather than adjust it.
pub const DEFAULT_RECOVERY_RATIO: f64 = 0.85;

/// Decimal places kept on the total recovery value.
const TOTAL_VALUE_DECIMALS: i32 = 1;

/// Derives the summary of a procedure. Never fails.
pub fn summarize(manifest: &Manifest, steps: &[Step]) -> Summary {
    let total_mass_kg = manifest.total_mass_kg();
    let recoverable_mass_ratio = if total_mass_kg > 0.0 {
        DEFAULT_RECOVERY_RATIO
    } else {
        0.0
    };

    let total_recovery_value = round_to(
        steps.iter().fold(0.0, |acc, s| acc + s.recovery_value),
        TOTAL_VALUE_DECIMALS,
    );

    let mut distinct_output_streams: Vec<String> = Vec::new();
    for step in steps.iter().filter(|s| s.is_recovering()) {
        if !distinct_output_streams.contains(&step.output_stream) {
            distinct_output_streams.push(step.output_stream.clone());
        }
    }

    Summary {
        total_time_minutes: steps.iter().map(|s| s.estimated_minutes).sum(),
        total_steps: steps.len(),
        total_mass_kg,
        recoverable_mass_ratio,
        total_recovery_value,
        distinct_output_streams,
    }
}
