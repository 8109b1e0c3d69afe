//! Check command report.

use std::path::PathBuf;

use repokit_core::Role;

use super::output::{Output, Report};

/// Resolved location of one folder role.
#[derive(Debug)]
pub struct FolderInfo {
    pub role: Role,
    pub folder: PathBuf,
    pub namespace: String,
}

/// Artifact state of one registered model.
#[derive(Debug)]
pub struct ModelStatus {
    pub name: String,
    pub class: String,
    pub model_exists: bool,
    /// Present and expected files of the repository scaffold.
    pub repository_files: (usize, usize),
    pub filter_exists: bool,
    pub getter_exists: bool,
}

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether the config file exists (defaults are used otherwise).
    pub found: bool,
    pub folders: Vec<FolderInfo>,
    pub models: Vec<ModelStatus>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.found {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.warning(&format!(
                "{} not found, using the default configuration",
                self.config_path.display()
            ));
        }
        out.newline();

        out.section("Folders");
        for info in &self.folders {
            out.key_value_indented(
                info.role.as_str(),
                &format!("{} ({})", info.folder.display(), info.namespace),
            );
        }
        out.newline();

        if self.models.is_empty() {
            out.key_value("Models", "none registered");
            return;
        }

        out.section(&format!("Models ({})", self.models.len()));
        for model in &self.models {
            let (present, total) = model.repository_files;
            out.list_item(&format!(
                "{}: model {}, repository {}/{}, filter {}, getter {}",
                model.name,
                if model.model_exists { "found" } else { "missing" },
                present,
                total,
                yes_no(model.filter_exists),
                yes_no(model.getter_exists),
            ));
            if !model.model_exists {
                out.warning(&format!("model class `{}` does not exist yet", model.class));
            }
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
