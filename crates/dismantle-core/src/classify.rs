//! Keyword classification of component labels.
//!
//! Free-text `kind` labels and material descriptors are mapped onto a
//! closed set of [`ComponentClass`] tags once, when a manifest is loaded.
//! The synthesizer only ever looks at the tags, so keyword changes stay
//! in this module.

use crate::types::{ComponentClass, MaterialProfile};

/// Kind keywords per class, in match order.
///
/// Input devices come before logic boards so that "keyboard" is never read
/// as a board. Keywords are whole normalized tokens; a hyphenated keyword
/// must match consecutive tokens of the label.
const KIND_KEYWORDS: &[(ComponentClass, &[&str])] = &[
    (
        ComponentClass::Battery,
        &[
            "battery",
            "batterie",
            "accumulator",
            "accumulateur",
            "power-bank",
            "cell-pack",
        ],
    ),
    (
        ComponentClass::InputDevice,
        &[
            "keyboard",
            "clavier",
            "trackpad",
            "touchpad",
            "pave-tactile",
            "pavé-tactile",
            "mouse",
            "souris",
        ],
    ),
    (
        ComponentClass::Display,
        &[
            "display", "screen", "ecran", "écran", "lcd", "oled", "dalle", "monitor", "moniteur",
        ],
    ),
    (
        ComponentClass::Storage,
        &[
            "storage",
            "stockage",
            "ssd",
            "hdd",
            "hard-disk",
            "hard-drive",
            "disque",
            "nvme",
            "emmc",
        ],
    ),
    (
        ComponentClass::Mainboard,
        &[
            "logic-board",
            "mainboard",
            "main-board",
            "motherboard",
            "carte-mere",
            "carte-mère",
            "pcb",
            "circuit",
        ],
    ),
    (
        ComponentClass::Cabling,
        &[
            "cable",
            "câble",
            "cabling",
            "câblage",
            "wire",
            "wiring",
            "harness",
            "nappe",
            "connector",
            "connecteur",
        ],
    ),
    (
        ComponentClass::Casing,
        &[
            "casing", "case", "housing", "enclosure", "chassis", "châssis", "boitier", "boîtier",
            "coque",
        ],
    ),
];

/// Material hints that identify a battery whose kind label is unrecognized.
const BATTERY_MATERIAL_HINTS: &[&str] = &["lithium", "li-ion", "li-po", "lipo", "nimh", "ni-mh"];

/// Material keywords that mark a descriptor as plastic-bearing.
const PLASTIC_KEYWORDS: &[&str] = &["plastique", "plastic"];

/// Normalize a free-text label to lowercase kebab-case.
///
/// # Examples
///
/// ```
/// use dismantle_core::classify::normalize_label;
///
/// assert_eq!(normalize_label("Logic Board"), "logic-board");
/// assert_eq!(normalize_label("carte_mere"), "carte-mere");
/// assert_eq!(normalize_label("  LITHIUM-ion "), "lithium-ion");
/// ```
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Classify a component from its kind label and material descriptor.
///
/// The kind decides first. Material hints are consulted only when the kind
/// matches nothing; anything still unmatched is [`ComponentClass::Other`].
pub fn classify_component(kind: &str, material: &str) -> ComponentClass {
    let kind = normalize_label(kind);
    let by_kind = KIND_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&kind, keywords))
        .map(|(class, _)| *class);

    if let Some(class) = by_kind {
        return class;
    }

    if contains_any(&normalize_label(material), BATTERY_MATERIAL_HINTS) {
        ComponentClass::Battery
    } else {
        ComponentClass::Other
    }
}

/// Derive the material profile of a descriptor.
pub fn profile_material(material: &str) -> MaterialProfile {
    MaterialProfile {
        plastic: contains_any(&normalize_label(material), PLASTIC_KEYWORDS),
    }
}

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    let tokens: Vec<&str> = label.split('-').filter(|t| !t.is_empty()).collect();
    keywords.iter().any(|keyword| contains_keyword(&tokens, keyword))
}

/// Matches a hyphenated keyword against consecutive label tokens.
fn contains_keyword(tokens: &[&str], keyword: &str) -> bool {
    let parts: Vec<&str> = keyword.split('-').collect();
    tokens
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(t, k)| token_matches(t, k)))
}

/// A token matches a keyword exactly or as its plural.
fn token_matches(token: &str, keyword: &str) -> bool {
    token == keyword
        || token.strip_suffix('s') == Some(keyword)
        || token.strip_suffix("es") == Some(keyword)
}
