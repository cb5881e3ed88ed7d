//! Manifest types: the raw input record and its validated form.

use serde::{Deserialize, Serialize};

use crate::types::{ComponentClass, ComponentEntry};

/// Raw manifest as supplied by an intake layer, before validation.
///
/// Every field is optional here so that missing data surfaces as a
/// validation error naming the field rather than as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestInput {
    /// Device category
    #[serde(default)]
    pub category: String,

    /// Device subcategory
    #[serde(default)]
    pub subcategory: String,

    /// Components; absent is an error, empty is fine
    #[serde(default)]
    pub components: Option<Vec<ComponentInput>>,
}

/// Raw component record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentInput {
    /// Keyworded classification label
    #[serde(default, alias = "type")]
    pub kind: Option<String>,

    /// Mass in kilograms, as a number or numeric string
    #[serde(default, alias = "mass", alias = "weight_kg")]
    pub mass_kg: Option<RawNumber>,

    /// Free-form material description
    #[serde(default, alias = "material")]
    pub material_descriptor: String,
}

impl ComponentInput {
    /// Convenience constructor for a fully-specified component.
    pub fn new(kind: impl Into<String>, mass_kg: f64, material: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            mass_kg: Some(RawNumber::Number(mass_kg)),
            material_descriptor: material.into(),
        }
    }
}

/// A number that may arrive as text from form-based intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Already numeric
    Number(f64),
    /// Textual, coerced by the loader
    Text(String),
}

/// The validated unit of work.
///
/// Components keep their input order; rules that need a representative
/// component pick the earliest match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    category: String,
    subcategory: String,
    components: Vec<ComponentEntry>,
}

impl Manifest {
    /// Creates a manifest from validated components.
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        components: Vec<ComponentEntry>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            components,
        }
    }

    /// Device category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Device subcategory.
    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Components in input order.
    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    /// Returns `true` if the manifest lists no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if any component has one of the given classes.
    pub fn has_any(&self, classes: &[ComponentClass]) -> bool {
        self.components.iter().any(|c| classes.contains(&c.class()))
    }

    /// Components of the given class, in input order.
    pub fn of_class(&self, class: ComponentClass) -> impl Iterator<Item = &ComponentEntry> {
        self.components.iter().filter(move |c| c.class() == class)
    }

    /// Sum of all component masses.
    pub fn total_mass_kg(&self) -> f64 {
        self.components
            .iter()
            .fold(0.0, |acc, c| acc + c.mass_kg())
    }
}
