//! Rule Catalog: the fixed, ordered set of dismantling rules.
//!
//! A catalog is an ordinary immutable value. It is built once (usually via
//! [`RuleCatalog::standard`]) and passed to the synthesizer; nothing reads
//! rules from process-wide state.
//!
//! Every catalog starts with an unconditional preparation rule and ends with
//! an unconditional finalization rule. The content rules in between fire at
//! most once each, in declaration order.

mod standard;

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{ComponentClass, Manifest, Priority, RepresentativePolicy, RuleId, Step};
use crate::util::round_to;

/// Decimal places kept on a step's recovery value.
const STEP_VALUE_DECIMALS: i32 = 2;

/// Applicability predicate of a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fires for every manifest.
    Always,
    /// Fires when any component has one of the classes.
    AnyOf(&'static [ComponentClass]),
    /// Fires when any component has one of the classes, or any component's
    /// material carries a plastics keyword.
    ///
    /// Plastic inside a part routed whole (a display, say) still triggers
    /// the sort; the value formula decides what that plastic is worth.
    AnyOfOrPlastic(&'static [ComponentClass]),
}

impl Trigger {
    /// Evaluates the predicate against a manifest.
    pub fn matches(&self, manifest: &Manifest) -> bool {
        match self {
            Trigger::Always => true,
            Trigger::AnyOf(classes) => manifest.has_any(classes),
            Trigger::AnyOfOrPlastic(classes) => {
                manifest.has_any(classes)
                    || manifest.components().iter().any(|c| c.material().plastic)
            }
        }
    }

    /// Returns `true` for unconditional triggers.
    pub fn is_unconditional(&self) -> bool {
        matches!(self, Trigger::Always)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Always => write!(f, "always"),
            Trigger::AnyOf(classes) => write!(f, "any {}", join_classes(classes)),
            Trigger::AnyOfOrPlastic(classes) => {
                write!(f, "any {} or plastic material", join_classes(classes))
            }
        }
    }
}

fn join_classes(classes: &[ComponentClass]) -> String {
    classes
        .iter()
        .map(ComponentClass::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// Recovery-value formula of a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormula {
    /// No recoverable value.
    Zero,
    /// A constant credit.
    Fixed(f64),
    /// Representative mass of a class times a per-kilogram factor.
    PerKgOfClass {
        /// Class whose mass is used
        class: ComponentClass,
        /// Credit per kilogram
        factor: f64,
    },
    /// Summed mass of resin-sortable components times a factor.
    ///
    /// Always aggregates; the representative policy does not apply.
    PerKgResinSortable {
        /// Credit per kilogram
        factor: f64,
    },
}

impl ValueFormula {
    /// Computes the credit for a manifest, rounded to two decimals.
    pub fn evaluate(&self, manifest: &Manifest, policy: RepresentativePolicy) -> f64 {
        let value = match *self {
            ValueFormula::Zero => 0.0,
            ValueFormula::Fixed(value) => value,
            ValueFormula::PerKgOfClass { class, factor } => {
                let mut matching = manifest.of_class(class).map(|c| c.mass_kg());
                let mass = match policy {
                    RepresentativePolicy::FirstMatch => matching.next().unwrap_or(0.0),
                    RepresentativePolicy::AggregateAll => matching.fold(0.0, |acc, m| acc + m),
                };
                mass * factor
            }
            ValueFormula::PerKgResinSortable { factor } => {
                let mass = manifest
                    .components()
                    .iter()
                    .filter(|c| c.is_resin_sortable())
                    .fold(0.0, |acc, c| acc + c.mass_kg());
                mass * factor
            }
        };
        round_to(value.max(0.0), STEP_VALUE_DECIMALS)
    }
}

/// Static description of the step a rule emits.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTemplate {
    /// Operator instruction
    pub action: &'static str,
    /// Tools required
    pub tools: &'static [&'static str],
    /// Protective equipment required
    pub ppe: &'static [&'static str],
    /// Fixed time estimate in minutes
    pub minutes: u32,
    /// Output stream label
    pub output_stream: &'static str,
    /// Hazard / urgency class
    pub priority: Priority,
    /// Recovery-value formula
    pub value: ValueFormula,
}

/// A (predicate, step-template) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    id: RuleId,
    trigger: Trigger,
    template: StepTemplate,
}

impl Rule {
    /// Creates a rule.
    pub fn new(id: impl Into<RuleId>, trigger: Trigger, template: StepTemplate) -> Self {
        Self {
            id: id.into(),
            trigger,
            template,
        }
    }

    /// Stable rule identifier.
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    /// Applicability predicate.
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Step template.
    pub fn template(&self) -> &StepTemplate {
        &self.template
    }

    /// Returns `true` if the rule fires for the manifest.
    pub fn applies(&self, manifest: &Manifest) -> bool {
        self.trigger.matches(manifest)
    }

    /// Builds the step this rule emits at position `sequence_number`.
    pub fn instantiate(
        &self,
        sequence_number: u32,
        manifest: &Manifest,
        policy: RepresentativePolicy,
    ) -> Step {
        let template = &self.template;
        Step {
            sequence_number,
            rule: self.id.clone(),
            action_text: template.action.to_string(),
            tools: dedup(template.tools),
            ppe: dedup(template.ppe),
            estimated_minutes: template.minutes,
            output_stream: template.output_stream.to_string(),
            recovery_value: template.value.evaluate(manifest, policy),
            priority: template.priority,
        }
    }
}

/// Order-preserving dedup of a static label list.
fn dedup(labels: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !out.iter().any(|seen| seen == label) {
            out.push((*label).to_string());
        }
    }
    out
}

/// Immutable, ordered collection of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Assembles a catalog from a preparation rule, content rules and a
    /// finalization rule.
    ///
    /// Fails when the bracketing rules are not unconditional or when two
    /// rules share an id.
    pub fn new(preparation: Rule, content: Vec<Rule>, finalization: Rule) -> Result<Self> {
        if !preparation.trigger.is_unconditional() {
            return Err(Error::validation_field(
                "preparation",
                "must fire unconditionally",
            ));
        }
        if !finalization.trigger.is_unconditional() {
            return Err(Error::validation_field(
                "finalization",
                "must fire unconditionally",
            ));
        }

        let mut rules = Vec::with_capacity(content.len() + 2);
        rules.push(preparation);
        rules.extend(content);
        rules.push(finalization);

        for (index, rule) in rules.iter().enumerate() {
            if rules[..index].iter().any(|other| other.id == rule.id) {
                return Err(Error::validation_field(
                    "rules",
                    format!("duplicate rule id '{}'", rule.id),
                ));
            }
        }

        Ok(Self { rules })
    }

    /// The standard e-waste teardown catalog.
    pub fn standard() -> Self {
        Self {
            rules: standard::rules(),
        }
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules, bracketing rules included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`: a catalog holds at least its two bracketing rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by id.
    pub fn get(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|rule| &rule.id == id)
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
