//! Manifest Loader: validation and normalization of raw input.
//!
//! The loader is the only fallible stage of the engine. It checks the
//! raw record, coerces numeric fields, classifies every component and
//! hands back an immutable [`Manifest`]. When no input is supplied at all
//! it substitutes the canonical laptop manifest.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{
    ComponentEntry, ComponentInput, Manifest, ManifestInput, RawNumber, check_mass,
};

/// Category of the canonical example device.
pub const CANONICAL_CATEGORY: &str = "it-equipment";

/// Subcategory of the canonical example device.
pub const CANONICAL_SUBCATEGORY: &str = "laptop";

/// Components of the canonical laptop: (kind, mass_kg, material).
const CANONICAL_COMPONENTS: &[(&str, f64, &str)] = &[
    ("battery", 0.3, "lithium-ion"),
    ("display", 0.5, "verre-plastique"),
    ("logic board", 0.2, "pcb-metaux"),
    ("storage", 0.15, "metaux-plastique"),
    ("casing", 0.8, "abs-polycarbonate"),
    ("keyboard", 0.3, "plastique-silicone"),
    ("cabling", 0.1, "cuivre-plastique"),
];

/// Serialized manifest formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl ManifestFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(ManifestFormat::Json),
            "toml" => Ok(ManifestFormat::Toml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

/// Entry points for turning raw input into a [`Manifest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    /// Validates `input`, or returns the canonical example when `None`.
    pub fn load(input: Option<&ManifestInput>) -> Result<Manifest> {
        match input {
            Some(input) => Self::from_input(input),
            None => {
                tracing::warn!("No manifest supplied, using canonical example");
                Ok(Self::canonical_example())
            }
        }
    }

    /// Validates and normalizes a raw manifest record.
    pub fn from_input(input: &ManifestInput) -> Result<Manifest> {
        let raw = input
            .components
            .as_ref()
            .ok_or_else(|| Error::validation_field("components", "is required"))?;

        let components = raw
            .iter()
            .enumerate()
            .map(|(index, component)| normalize_component(index, component))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            category = %input.category,
            components = components.len(),
            "Manifest validated"
        );

        Ok(Manifest::new(
            input.category.clone(),
            input.subcategory.clone(),
            components,
        ))
    }

    /// Parses and validates a serialized manifest.
    ///
    /// A blank document counts as no input and yields the canonical example.
    pub fn parse(source: &str, format: ManifestFormat) -> Result<Manifest> {
        if source.trim().is_empty() {
            return Self::load(None);
        }
        let input: ManifestInput = match format {
            ManifestFormat::Json => serde_json::from_str(source)?,
            ManifestFormat::Toml => toml::from_str(source)?,
        };
        Self::from_input(&input)
    }

    /// Parses and validates a JSON manifest.
    pub fn from_json_str(source: &str) -> Result<Manifest> {
        Self::parse(source, ManifestFormat::Json)
    }

    /// Parses and validates a TOML manifest.
    pub fn from_toml_str(source: &str) -> Result<Manifest> {
        Self::parse(source, ManifestFormat::Toml)
    }

    /// Reads a manifest file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)?;
        let source = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::parse(&source, format)
    }

    /// The canonical laptop-class manifest used when no input is given.
    pub fn canonical_example() -> Manifest {
        let components = CANONICAL_COMPONENTS
            .iter()
            .map(|(kind, mass, material)| {
                ComponentEntry::classified(kind.to_string(), *mass, material.to_string())
            })
            .collect();
        Manifest::new(CANONICAL_CATEGORY, CANONICAL_SUBCATEGORY, components)
    }

    /// The canonical laptop as a raw input record.
    pub fn canonical_input() -> ManifestInput {
        ManifestInput {
            category: CANONICAL_CATEGORY.to_string(),
            subcategory: CANONICAL_SUBCATEGORY.to_string(),
            components: Some(
                CANONICAL_COMPONENTS
                    .iter()
                    .map(|(kind, mass, material)| ComponentInput::new(*kind, *mass, *material))
                    .collect(),
            ),
        }
    }
}

fn normalize_component(index: usize, input: &ComponentInput) -> Result<ComponentEntry> {
    let kind = input
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .ok_or_else(|| Error::validation_field(format!("components[{index}].kind"), "is required"))?;

    let mass_field = format!("components[{index}].mass_kg");
    let mass_kg = match &input.mass_kg {
        None => 0.0,
        Some(raw) => coerce_number(&mass_field, raw)?,
    };
    check_mass(&mass_field, mass_kg)?;

    Ok(ComponentEntry::classified(
        kind.to_string(),
        mass_kg,
        input.material_descriptor.trim().to_string(),
    ))
}

/// Coerces a numeric field, accepting a decimal comma in text.
fn coerce_number(field: &str, raw: &RawNumber) -> Result<f64> {
    match raw {
        RawNumber::Number(value) => Ok(*value),
        RawNumber::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0.0);
            }
            text.replace(',', ".").parse::<f64>().map_err(|_| {
                Error::validation_field(field, format!("'{text}' is not a number"))
            })
        }
    }
}
