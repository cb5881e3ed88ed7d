//! Engine facade: synthesize, then summarize.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aggregate::summarize;
use crate::catalog::RuleCatalog;
use crate::error::Result;
use crate::loader::ManifestLoader;
use crate::synth::synthesize;
use crate::types::{Manifest, ManifestInput, RepresentativePolicy, Step, Summary};

/// Steps and summary for one manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Ordered dismantling steps
    pub steps: Vec<Step>,

    /// Aggregate metrics
    pub summary: Summary,
}

/// Dismantling-procedure engine.
///
/// Holds an immutable catalog behind an [`Arc`], so clones are cheap and
/// any number of callers can generate concurrently without locking.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<RuleCatalog>,
    policy: RepresentativePolicy,
}

impl Engine {
    /// Creates an engine over the given catalog.
    pub fn new(catalog: impl Into<Arc<RuleCatalog>>, policy: RepresentativePolicy) -> Self {
        Self {
            catalog: catalog.into(),
            policy,
        }
    }

    /// Returns a copy of this engine using a different policy.
    pub fn with_policy(mut self, policy: RepresentativePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalog rules are drawn from.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// The representative policy in use.
    pub fn policy(&self) -> RepresentativePolicy {
        self.policy
    }

    /// Synthesizes the steps for a validated manifest and summarizes them.
    pub fn generate(&self, manifest: &Manifest) -> Report {
        let steps = synthesize(&self.catalog, manifest, self.policy);
        let summary = summarize(manifest, &steps);

        tracing::info!(
            category = %manifest.category(),
            subcategory = %manifest.subcategory(),
            policy = %self.policy,
            steps = summary.total_steps,
            total_minutes = summary.total_time_minutes,
            total_recovery_value = summary.total_recovery_value,
            "Procedure generated"
        );

        Report { steps, summary }
    }

    /// Validates raw input (or substitutes the canonical example when
    /// `None`) and generates its report.
    pub fn run(&self, input: Option<&ManifestInput>) -> Result<Report> {
        let manifest = ManifestLoader::load(input)?;
        Ok(self.generate(&manifest))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RuleCatalog::standard(), RepresentativePolicy::default())
    }
}
