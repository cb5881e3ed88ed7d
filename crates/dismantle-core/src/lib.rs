#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Dismantle Core Library
//!
//! The dismantling-procedure synthesis engine: manifest loading and
//! classification, the rule catalog, step synthesis and summary metrics.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod engine;
pub mod error;
pub mod loader;
pub mod synth;
pub mod types;
pub mod util;

// Re-exports for convenience
pub use aggregate::{DEFAULT_RECOVERY_RATIO, summarize};
pub use catalog::{Rule, RuleCatalog, StepTemplate, Trigger, ValueFormula};
pub use engine::{Engine, Report};
pub use error::{Error, Result};
pub use loader::{ManifestFormat, ManifestLoader};
pub use synth::synthesize;
pub use types::{
    ComponentClass, ComponentEntry, ComponentInput, Manifest, ManifestInput, MaterialProfile,
    Priority, RawNumber, RepresentativePolicy, RuleId, Step, Summary,
};
