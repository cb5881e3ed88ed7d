//! Representative selection policy for mass-proportional rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a rule picks the component mass its recovery value is based on.
///
/// A rule fires at most once either way; the policy only changes which
/// mass feeds the formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepresentativePolicy {
    /// Use the first matching component in manifest order.
    #[default]
    FirstMatch,
    /// Use the summed mass of every matching component.
    AggregateAll,
}

impl fmt::Display for RepresentativePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepresentativePolicy::FirstMatch => write!(f, "first-match"),
            RepresentativePolicy::AggregateAll => write!(f, "aggregate-all"),
        }
    }
}

impl FromStr for RepresentativePolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "first-match" => Ok(RepresentativePolicy::FirstMatch),
            "aggregate-all" => Ok(RepresentativePolicy::AggregateAll),
            other => Err(Error::validation_field(
                "policy",
                format!("unknown policy '{other}', expected 'first-match' or 'aggregate-all'"),
            )),
        }
    }
}
