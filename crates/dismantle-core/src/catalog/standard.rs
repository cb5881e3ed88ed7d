//! The standard teardown rule set.

use super::{Rule, StepTemplate, Trigger, ValueFormula};
use crate::types::{ComponentClass, Priority};

const SCREWDRIVERS: &str = "precision screwdriver set";
const SPUDGER: &str = "plastic spudger";
const ESD_STRAP: &str = "ESD wrist strap";
const SORTING_BINS: &str = "sorting bins";

const GLASSES: &str = "safety glasses";
const NITRILE: &str = "nitrile gloves";
const INSULATED: &str = "insulated gloves";

/// Rules in evaluation order: preparation first, finalization last.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "prepare-workspace",
            Trigger::Always,
            StepTemplate {
                action: "Prepare the workstation: clear the bench, ground the ESD mat and check protective equipment",
                tools: &["ESD mat", "parts trays"],
                ppe: &[GLASSES, NITRILE],
                minutes: 3,
                output_stream: "none",
                priority: Priority::Medium,
                value: ValueFormula::Zero,
            },
        ),
        Rule::new(
            "discharge-power",
            Trigger::AnyOf(&[ComponentClass::Battery]),
            StepTemplate {
                action: "Power the device down, unplug external power and wait for residual charge to dissipate",
                tools: &["multimeter"],
                ppe: &[GLASSES, INSULATED],
                minutes: 6,
                output_stream: "none",
                priority: Priority::Critical,
                value: ValueFormula::Zero,
            },
        ),
        Rule::new(
            "extract-battery",
            Trigger::AnyOf(&[ComponentClass::Battery]),
            StepTemplate {
                action: "Disconnect and remove the battery, tape its terminals and store it in a fire-safe container",
                tools: &[SCREWDRIVERS, SPUDGER, "insulating tape", "fire-safe container"],
                ppe: &[GLASSES, INSULATED],
                minutes: 4,
                output_stream: "battery-recycling",
                priority: Priority::Critical,
                value: ValueFormula::PerKgOfClass {
                    class: ComponentClass::Battery,
                    factor: 15.0,
                },
            },
        ),
        Rule::new(
            "separate-display",
            Trigger::AnyOf(&[ComponentClass::Display]),
            StepTemplate {
                action: "Release the hinges, disconnect the panel cable and lift the display assembly away",
                tools: &[SCREWDRIVERS, SPUDGER, "suction cup"],
                ppe: &[GLASSES, "cut-resistant gloves"],
                minutes: 8,
                output_stream: "display-recycling",
                priority: Priority::High,
                value: ValueFormula::PerKgOfClass {
                    class: ComponentClass::Display,
                    factor: 8.0,
                },
            },
        ),
        Rule::new(
            "extract-internals",
            Trigger::AnyOf(&[ComponentClass::Mainboard, ComponentClass::Storage]),
            StepTemplate {
                action: "Remove memory modules, storage drives and wireless cards",
                tools: &[SCREWDRIVERS, ESD_STRAP, "anti-static bags"],
                ppe: &[NITRILE],
                minutes: 7,
                output_stream: "electronic-components",
                priority: Priority::Medium,
                value: ValueFormula::Fixed(25.0),
            },
        ),
        Rule::new(
            "extract-mainboard",
            Trigger::AnyOf(&[ComponentClass::Mainboard]),
            StepTemplate {
                action: "Unscrew the logic board, release every ribbon connector and lift it out",
                tools: &[SCREWDRIVERS, SPUDGER, ESD_STRAP],
                ppe: &[NITRILE],
                minutes: 10,
                output_stream: "precious-metals-recovery",
                priority: Priority::High,
                value: ValueFormula::PerKgOfClass {
                    class: ComponentClass::Mainboard,
                    factor: 50.0,
                },
            },
        ),
        Rule::new(
            "recover-cabling",
            Trigger::AnyOf(&[ComponentClass::Cabling]),
            StepTemplate {
                action: "Pull internal cables and connectors and bundle them for copper recovery",
                tools: &["wire cutters", "tweezers"],
                ppe: &[NITRILE],
                minutes: 3,
                output_stream: "copper-recovery",
                priority: Priority::Medium,
                value: ValueFormula::PerKgOfClass {
                    class: ComponentClass::Cabling,
                    factor: 12.0,
                },
            },
        ),
        Rule::new(
            "separate-input-devices",
            Trigger::AnyOf(&[ComponentClass::InputDevice]),
            StepTemplate {
                action: "Separate the keyboard and trackpad from the top case",
                tools: &[SPUDGER, SCREWDRIVERS],
                ppe: &[NITRILE],
                minutes: 5,
                output_stream: "input-device-recovery",
                priority: Priority::Low,
                value: ValueFormula::Fixed(5.0),
            },
        ),
        Rule::new(
            "sort-plastics",
            Trigger::AnyOfOrPlastic(&[ComponentClass::Casing]),
            StepTemplate {
                action: "Sort the remaining plastic parts by resin family using their recycling marks",
                tools: &[SORTING_BINS],
                ppe: &[NITRILE],
                minutes: 6,
                output_stream: "plastics-recycling",
                priority: Priority::Low,
                value: ValueFormula::PerKgResinSortable { factor: 6.0 },
            },
        ),
        Rule::new(
            "final-sort",
            Trigger::Always,
            StepTemplate {
                action: "Check that no hazardous part remains and route each fraction to its output stream",
                tools: &["scale", SORTING_BINS],
                ppe: &[GLASSES],
                minutes: 4,
                output_stream: "quality-control",
                priority: Priority::Medium,
                value: ValueFormula::Fixed(10.0),
            },
        ),
    ]
}
