//! Identifier types for catalog rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a rule in the catalog.
///
/// Rule IDs are short kebab-case names like "prepare-workspace" or
/// "extract-battery". They are carried on every synthesized step so a
/// consumer can tell which rule produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new rule ID from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use dismantle_core::RuleId;
    ///
    /// let id = RuleId::new("extract-battery");
    /// assert_eq!(id.as_str(), "extract-battery");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the rule ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
