//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod scaffold;
mod wire;

use std::path::Path;

pub use check::{CheckReport, FolderInfo, ModelStatus};
pub use output::{Output, Report, TerminalOutput};
pub use scaffold::ScaffoldSummary;
pub use wire::WireReport;

/// Display a path relative to the project directory when it lies inside it.
fn display_path(project_dir: &Path, path: &Path) -> String {
    path.strip_prefix(project_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
