//! Plain-text rendering of reports, classifications and the catalog.

use std::fmt;

use dismantle_core::{Manifest, Report, RuleCatalog, Step, Summary};

/// Renders a report as an operator checklist followed by its summary.
pub fn report(report: &Report) -> String {
    ReportView(report).to_string()
}

/// Renders one line per component with its derived class.
pub fn classification(manifest: &Manifest) -> String {
    ClassificationView(manifest).to_string()
}

/// Renders the catalog in evaluation order.
pub fn catalog(catalog: &RuleCatalog) -> String {
    CatalogView(catalog).to_string()
}

struct ReportView<'a>(&'a Report);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0.steps {
            write_step(f, step)?;
        }
        write_summary(f, &self.0.summary)
    }
}

fn write_step(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
    writeln!(
        f,
        "[ ] {:>2}. {} ({} min, {})",
        step.sequence_number, step.action_text, step.estimated_minutes, step.priority
    )?;
    if !step.tools.is_empty() {
        writeln!(f, "        tools: {}", step.tools.join(", "))?;
    }
    if !step.ppe.is_empty() {
        writeln!(f, "        ppe:   {}", step.ppe.join(", "))?;
    }
    if step.is_recovering() {
        writeln!(
            f,
            "        -> {} ({:.2})",
            step.output_stream, step.recovery_value
        )?;
    }
    Ok(())
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &Summary) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "steps:           {}", summary.total_steps)?;
    writeln!(f, "total time:      {} min", summary.total_time_minutes)?;
    writeln!(f, "total mass:      {:.2} kg", summary.total_mass_kg)?;
    writeln!(
        f,
        "recoverable:     {:.0}%",
        summary.recoverable_mass_ratio * 100.0
    )?;
    writeln!(f, "recovery value:  {:.1}", summary.total_recovery_value)?;
    if !summary.distinct_output_streams.is_empty() {
        writeln!(
            f,
            "streams:         {}",
            summary.distinct_output_streams.join(", ")
        )?;
    }
    Ok(())
}

struct ClassificationView<'a>(&'a Manifest);

impl fmt::Display for ClassificationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manifest = self.0;
        writeln!(f, "{} / {}", manifest.category(), manifest.subcategory())?;
        for component in manifest.components() {
            let plastic = if component.is_resin_sortable() {
                " [resin-sortable]"
            } else {
                ""
            };
            writeln!(
                f,
                "  {:<24} {:>7.3} kg  {}{plastic}",
                component.kind(),
                component.mass_kg(),
                component.class()
            )?;
        }
        Ok(())
    }
}

struct CatalogView<'a>(&'a RuleCatalog);

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.0.rules().iter().enumerate() {
            let template = rule.template();
            writeln!(
                f,
                "{:>2}. {:<24} {:<8} {:>3} min  {:<26} when {}",
                i + 1,
                rule.id().as_str(),
                template.priority.to_string(),
                template.minutes,
                template.output_stream,
                rule.trigger()
            )?;
        }
        Ok(())
    }
}
