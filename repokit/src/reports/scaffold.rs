//! Scaffold command report.

use std::path::PathBuf;

use repokit_codegen::{Error, ScaffoldReport, WriteOutcome};
use repokit_core::capitalize;

use super::{
    display_path,
    output::{Output, Report},
};

/// Outcome of one scaffold command.
#[derive(Debug)]
pub struct ScaffoldSummary {
    /// Project directory, used to shorten displayed paths.
    pub project_dir: PathBuf,
    pub report: ScaffoldReport,
    /// Fatal error that stopped the batch after `report.artifacts`.
    pub error: Option<Error>,
}

impl ScaffoldSummary {
    fn render_preview(&self, out: &mut dyn Output) {
        for artifact in &self.report.artifacts {
            let Some(content) = &artifact.content else {
                continue;
            };
            let path = display_path(&self.project_dir, artifact.outcome.path());
            out.divider(&format!("{}: {}", artifact.kind.label(), path));
            out.preformatted(content);
        }
        out.divider("Summary");
    }
}

impl Report for ScaffoldSummary {
    fn render(&self, out: &mut dyn Output) {
        let report = &self.report;

        if report.dry_run {
            out.preformatted("Dry run, nothing is written.");
            self.render_preview(out);
        }
        out.section(&format!(
            "{} for {}",
            capitalize(report.kind.as_str()),
            report.model
        ));

        for artifact in &report.artifacts {
            let path = display_path(&self.project_dir, artifact.outcome.path());
            match artifact.outcome {
                WriteOutcome::Created(_) => out.added_item(&path),
                WriteOutcome::Skipped(_) => out.skipped_item(&path),
            }
        }

        for diagnostic in &report.diagnostics {
            out.warning(&diagnostic.message);
        }

        let created = report.created().count();
        let skipped = report.skipped().count();
        out.newline();
        if self.error.is_some() {
            out.preformatted(&format!(
                "Stopped after {} created, {} skipped",
                created, skipped
            ));
        } else if report.dry_run {
            out.preformatted(&format!(
                "{} would be created, {} skipped",
                created, skipped
            ));
        } else {
            out.preformatted(&format!("{} created, {} skipped", created, skipped));
        }
    }
}
