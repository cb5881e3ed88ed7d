//! Synthesized dismantling steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::RuleId;

/// Hazard / urgency class of a step.
///
/// Ordered from most to least urgent, so `Critical < Low` under `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be handled before anything else; risk of fire or injury.
    Critical,
    /// Hazardous or high-value material.
    High,
    /// Routine extraction.
    Medium,
    /// Sorting and cosmetic work.
    Low,
}

impl Priority {
    /// Returns `true` if the step handles a hazard (Critical or High).
    pub fn is_hazardous(&self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One synthesized unit of dismantling work.
///
/// Steps are produced once per generation and never mutated afterwards.
/// Progress flags (expanded, completed) belong to whoever renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position in the procedure, without gaps
    pub sequence_number: u32,

    /// Rule that produced this step
    pub rule: RuleId,

    /// What the operator does
    pub action_text: String,

    /// Tools needed, without duplicates
    pub tools: Vec<String>,

    /// Personal protective equipment, without duplicates
    pub ppe: Vec<String>,

    /// Time estimate in minutes
    pub estimated_minutes: u32,

    /// Downstream stream the output is routed to
    pub output_stream: String,

    /// Notional avoided-emissions credit (never negative)
    pub recovery_value: f64,

    /// Hazard / urgency class
    pub priority: Priority,
}

impl Step {
    /// Returns `true` if the step yields recoverable value.
    pub fn is_recovering(&self) -> bool {
        self.recovery_value > 0.0
    }
}
