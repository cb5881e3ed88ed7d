//! Handlers for the reporting commands.
//!
//! Flags given on the command line override the configuration file.

use std::io::Read;

use dismantle_core::{Engine, Manifest, ManifestFormat, ManifestLoader, RuleCatalog};
use serde::Serialize;

use crate::cli::{GenerateArgs, InputArgs, OutputArgs, StdinFormat};
use crate::config::{DismantleConfig, OutputFormat};
use crate::error::{Error, Result};
use crate::render;

/// Input value that selects stdin.
pub const STDIN_MARKER: &str = "-";

/// Loads the manifest named by `input`.
///
/// `None` yields the canonical example; `-` reads stdin in `stdin_format`.
pub fn load_manifest(input: Option<&str>, stdin_format: StdinFormat) -> Result<Manifest> {
    match input {
        None => Ok(ManifestLoader::load(None)?),
        Some(STDIN_MARKER) => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| Error::io_with_path(e, STDIN_MARKER))?;
            Ok(ManifestLoader::parse(&source, ManifestFormat::from(stdin_format))?)
        }
        Some(path) => Ok(ManifestLoader::from_path(path)?),
    }
}

/// `generate`: synthesize the procedure for a manifest.
pub fn cmd_generate(config: &DismantleConfig, args: &GenerateArgs) -> Result<String> {
    let manifest = load_manifest(args.input.input.as_deref(), args.input.stdin_format)?;
    generate_for(config, args, &manifest)
}

/// Generates and renders the report for an already-loaded manifest.
pub fn generate_for(
    config: &DismantleConfig,
    args: &GenerateArgs,
    manifest: &Manifest,
) -> Result<String> {
    let policy = args.policy.unwrap_or(config.engine.policy);
    let report = Engine::new(RuleCatalog::standard(), policy).generate(manifest);

    match resolve_format(config, &args.input.output) {
        OutputFormat::Json => to_json(&report, config, &args.input.output),
        OutputFormat::Text => Ok(render::report(&report)),
    }
}

/// `classify`: show the class derived for each component.
pub fn cmd_classify(config: &DismantleConfig, args: &InputArgs) -> Result<String> {
    let manifest = load_manifest(args.input.as_deref(), args.stdin_format)?;
    classify_for(config, args, &manifest)
}

/// Renders the classification of an already-loaded manifest.
pub fn classify_for(
    config: &DismantleConfig,
    args: &InputArgs,
    manifest: &Manifest,
) -> Result<String> {
    match resolve_format(config, &args.output) {
        OutputFormat::Json => to_json(manifest, config, &args.output),
        OutputFormat::Text => Ok(render::classification(manifest)),
    }
}

/// `catalog`: list the standard rules.
pub fn cmd_catalog(config: &DismantleConfig, args: &OutputArgs) -> Result<String> {
    let catalog = RuleCatalog::standard();
    match resolve_format(config, args) {
        OutputFormat::Json => {
            let entries: Vec<CatalogEntry<'_>> = catalog
                .rules()
                .iter()
                .map(|rule| {
                    let template = rule.template();
                    CatalogEntry {
                        id: rule.id().as_str(),
                        trigger: rule.trigger().to_string(),
                        action: template.action,
                        estimated_minutes: template.minutes,
                        output_stream: template.output_stream,
                        priority: template.priority.to_string(),
                    }
                })
                .collect();
            to_json(&entries, config, args)
        }
        OutputFormat::Text => Ok(render::catalog(&catalog)),
    }
}

/// JSON view of one catalog rule.
#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    id: &'a str,
    trigger: String,
    action: &'a str,
    estimated_minutes: u32,
    output_stream: &'a str,
    priority: String,
}

fn resolve_format(config: &DismantleConfig, args: &OutputArgs) -> OutputFormat {
    args.format.unwrap_or(config.output.format)
}

fn to_json<T: Serialize>(value: &T, config: &DismantleConfig, args: &OutputArgs) -> Result<String> {
    let json = if args.pretty || config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dismantle_core::{Report, RepresentativePolicy};

    fn laptop() -> Manifest {
        ManifestLoader::canonical_example()
    }

    #[test]
    fn test_load_manifest_defaults_to_canonical() {
        let manifest = load_manifest(None, StdinFormat::Json).unwrap();
        assert_eq!(manifest, laptop());
    }

    #[test]
    fn test_load_manifest_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("phone.toml");
        std::fs::write(
            &path,
            "category = \"it\"\nsubcategory = \"phone\"\n\n[[components]]\nkind = \"battery\"\nmass_kg = 0.05\n",
        )
        .unwrap();

        let manifest = load_manifest(path.to_str(), StdinFormat::Json).unwrap();
        assert_eq!(manifest.subcategory(), "phone");
        assert_eq!(manifest.components().len(), 1);
    }

    #[test]
    fn test_load_manifest_missing_file_is_core_error() {
        let err = load_manifest(Some("/nonexistent/manifest.json"), StdinFormat::Json).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }

    #[test]
    fn test_generate_json_is_a_report() {
        let out = generate_for(&DismantleConfig::default(), &GenerateArgs::default(), &laptop())
            .unwrap();
        let report: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(report.summary.total_steps, 10);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_generate_policy_flag_overrides_config() {
        let mut manifest_components = laptop().components().to_vec();
        manifest_components.push(
            dismantle_core::ComponentEntry::new("second battery", 0.2, "lithium-ion").unwrap(),
        );
        let manifest = Manifest::new("it-equipment", "laptop", manifest_components);

        let config = DismantleConfig::default();
        let args = GenerateArgs {
            policy: Some(RepresentativePolicy::AggregateAll),
            ..GenerateArgs::default()
        };
        let out = generate_for(&config, &args, &manifest).unwrap();
        let report: Report = serde_json::from_str(&out).unwrap();
        let battery = report
            .steps
            .iter()
            .find(|s| s.rule.as_str() == "extract-battery")
            .unwrap();
        assert!((battery.recovery_value - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_generate_text_from_config() {
        let mut config = DismantleConfig::default();
        config.output.format = OutputFormat::Text;
        let out = generate_for(&config, &GenerateArgs::default(), &laptop()).unwrap();
        assert!(out.contains("[ ]  1."));
    }

    #[test]
    fn test_pretty_flag() {
        let mut args = GenerateArgs::default();
        args.input.output.pretty = true;
        let out = generate_for(&DismantleConfig::default(), &args, &laptop()).unwrap();
        assert!(out.contains("\n  \"steps\""));
    }

    #[test]
    fn test_classify_json() {
        let out = classify_for(&DismantleConfig::default(), &InputArgs::default(), &laptop())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["components"][2]["class"], "mainboard");
        assert_eq!(value["components"][5]["class"], "input-device");
    }

    #[test]
    fn test_catalog_json() {
        let out = cmd_catalog(&DismantleConfig::default(), &OutputArgs::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rules = value.as_array().unwrap();
        assert_eq!(rules.len(), 10);
        assert_eq!(rules[0]["id"], "prepare-workspace");
        assert_eq!(rules[0]["trigger"], "always");
        assert_eq!(rules[2]["priority"], "critical");
    }
}
