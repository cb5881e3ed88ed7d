//! Core types for manifests, steps and summaries.

mod component;
mod ids;
mod manifest;
mod policy;
mod proptests;
mod step;
mod summary;

pub use component::{ComponentClass, ComponentEntry, MaterialProfile};
pub(crate) use component::check_mass;
pub use ids::RuleId;
pub use manifest::{ComponentInput, Manifest, ManifestInput, RawNumber};
pub use policy::RepresentativePolicy;
pub use step::{Priority, Step};
pub use summary::Summary;
