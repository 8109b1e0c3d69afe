//! Wire operation - bindings and event listener map of registered models.

use std::path::Path;

use eyre::{Context, Result};
use repokit_codegen::{ConventionMapper, Templates, Wiring};
use repokit_config::Config;
use repokit_core::LocalFs;

use crate::reports::WireReport;

/// Options for the wire operation.
pub struct WireOptions<'a> {
    /// Project directory the application root is relative to.
    pub project_dir: &'a Path,
    /// Whether to write the service provider.
    pub write: bool,
}

/// Execute the wire operation.
pub fn wire(config: &Config, opts: WireOptions) -> Result<WireReport> {
    let mapper = ConventionMapper::new(config, opts.project_dir);
    let wiring = Wiring::plan(&mapper, config, &LocalFs).wrap_err("Failed to plan wiring")?;

    let provider = if opts.write {
        let templates =
            Templates::load(mapper.stubs_dir(), &LocalFs).wrap_err("Failed to load stubs")?;
        let path = wiring
            .write_provider(&mapper, &templates, &LocalFs)
            .wrap_err("Failed to write service provider")?;
        Some(path)
    } else {
        None
    };

    Ok(WireReport {
        project_dir: opts.project_dir.to_path_buf(),
        provider_class: mapper.provider_class(),
        wiring,
        provider,
    })
}
