//! Scaffold operation - write the artifacts of one model.

use std::path::Path;

use eyre::{Context, Result};
use repokit_codegen::{ConventionMapper, ModelIdentifier, Scaffold, ScaffoldKind, Templates};
use repokit_config::Config;
use repokit_core::LocalFs;

use crate::reports::ScaffoldSummary;

/// Options for the scaffold operation.
pub struct ScaffoldOptions<'a> {
    /// Project directory the application root is relative to.
    pub project_dir: &'a Path,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the scaffold operation.
///
/// Existing files are kept. A filesystem error stops the batch; the summary
/// then lists what was written before it and carries the error.
pub fn scaffold(
    kind: ScaffoldKind,
    model: &ModelIdentifier,
    config: &Config,
    opts: ScaffoldOptions,
) -> Result<ScaffoldSummary> {
    let mapper = ConventionMapper::new(config, opts.project_dir);
    let templates =
        Templates::load(mapper.stubs_dir(), &LocalFs).wrap_err("Failed to load stubs")?;

    let (report, error) = match Scaffold::new(kind)
        .dry_run(opts.dry_run)
        .run(model, &mapper, config, &templates, &LocalFs)
    {
        Ok(report) => (report, None),
        Err(aborted) => (*aborted.report, Some(aborted.error)),
    };

    Ok(ScaffoldSummary {
        project_dir: opts.project_dir.to_path_buf(),
        report,
        error,
    })
}
