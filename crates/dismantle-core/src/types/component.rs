//! Component entries and their classification tags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{classify_component, profile_material};
use crate::error::{Error, Result};

/// Closed classification of a component, derived from its keyworded labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentClass {
    /// Rechargeable cell or battery pack.
    Battery,
    /// Screen assembly.
    Display,
    /// Logic board / motherboard.
    Mainboard,
    /// SSD, HDD or soldered flash.
    Storage,
    /// Cables, harnesses and connectors.
    Cabling,
    /// Keyboard, trackpad or other input device.
    InputDevice,
    /// Outer shell or chassis.
    Casing,
    /// Anything no keyword recognized.
    Other,
}

impl ComponentClass {
    /// All classes, in classification order.
    pub const ALL: [ComponentClass; 8] = [
        ComponentClass::Battery,
        ComponentClass::InputDevice,
        ComponentClass::Display,
        ComponentClass::Storage,
        ComponentClass::Mainboard,
        ComponentClass::Cabling,
        ComponentClass::Casing,
        ComponentClass::Other,
    ];

    /// Returns `true` for classes that leave the bench whole, bound for a
    /// dedicated stream, and are therefore never resin-sorted.
    pub fn is_routed_whole(&self) -> bool {
        matches!(
            self,
            ComponentClass::Battery
                | ComponentClass::Display
                | ComponentClass::Mainboard
                | ComponentClass::Storage
        )
    }
}

impl fmt::Display for ComponentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentClass::Battery => write!(f, "battery"),
            ComponentClass::Display => write!(f, "display"),
            ComponentClass::Mainboard => write!(f, "mainboard"),
            ComponentClass::Storage => write!(f, "storage"),
            ComponentClass::Cabling => write!(f, "cabling"),
            ComponentClass::InputDevice => write!(f, "input-device"),
            ComponentClass::Casing => write!(f, "casing"),
            ComponentClass::Other => write!(f, "other"),
        }
    }
}

/// What the material descriptor says about composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// The descriptor carries a plastics keyword.
    pub plastic: bool,
}

/// A physical sub-part of the device under dismantling.
///
/// Entries are validated and classified on construction and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEntry {
    kind: String,
    mass_kg: f64,
    material_descriptor: String,
    class: ComponentClass,
    material: MaterialProfile,
}

impl ComponentEntry {
    /// Creates a validated, classified component.
    ///
    /// Fails when `kind` is blank or `mass_kg` is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use dismantle_core::{ComponentClass, ComponentEntry};
    ///
    /// let battery = ComponentEntry::new("battery", 0.3, "lithium-ion").unwrap();
    /// assert_eq!(battery.class(), ComponentClass::Battery);
    /// assert!(ComponentEntry::new("battery", -1.0, "").is_err());
    /// ```
    pub fn new(
        kind: impl Into<String>,
        mass_kg: f64,
        material_descriptor: impl Into<String>,
    ) -> Result<Self> {
        let kind = kind.into();
        if kind.trim().is_empty() {
            return Err(Error::validation_field("kind", "is required"));
        }
        check_mass("mass_kg", mass_kg)?;
        Ok(Self::classified(kind, mass_kg, material_descriptor.into()))
    }

    /// Builds an entry from already-validated fields.
    pub(crate) fn classified(kind: String, mass_kg: f64, material_descriptor: String) -> Self {
        let class = classify_component(&kind, &material_descriptor);
        let material = profile_material(&material_descriptor);
        Self {
            kind,
            mass_kg,
            material_descriptor,
            class,
            material,
        }
    }

    /// The kind label as supplied.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Mass in kilograms (never negative).
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// The material descriptor as supplied.
    pub fn material_descriptor(&self) -> &str {
        &self.material_descriptor
    }

    /// Classification derived from the kind (and material hints).
    pub fn class(&self) -> ComponentClass {
        self.class
    }

    /// Composition flags derived from the material descriptor.
    pub fn material(&self) -> MaterialProfile {
        self.material
    }

    /// Returns `true` when the component's plastic can go to resin sorting.
    pub fn is_resin_sortable(&self) -> bool {
        self.material.plastic && !self.class.is_routed_whole()
    }
}

/// Rejects negative and non-finite masses, naming `field` in the error.
pub(crate) fn check_mass(field: &str, mass_kg: f64) -> Result<()> {
    if !mass_kg.is_finite() {
        return Err(Error::validation_field(field, "must be a finite number"));
    }
    if mass_kg < 0.0 {
        return Err(Error::validation_field(
            field,
            format!("must be >= 0, got {mass_kg}"),
        ));
    }
    Ok(())
}
