//! Aggregate metrics over a synthesized procedure.

use serde::{Deserialize, Serialize};

/// Totals derived from a manifest and its steps.
///
/// A summary is recomputed on demand and never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of every step's estimate
    pub total_time_minutes: u32,

    /// Number of steps
    pub total_steps: usize,

    /// Mass of every component in the manifest, matched or not
    pub total_mass_kg: f64,

    /// Share of mass considered recoverable
    pub recoverable_mass_ratio: f64,

    /// Sum of step recovery values, rounded to one decimal
    pub total_recovery_value: f64,

    /// Output streams of value-bearing steps, first-seen order
    pub distinct_output_streams: Vec<String>,
}
