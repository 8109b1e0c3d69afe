//! Wire command report.

use std::path::PathBuf;

use repokit_codegen::{BindingState, Wiring};

use super::{
    display_path,
    output::{Output, Report},
};

/// Planned wiring, and where the provider was written if it was.
#[derive(Debug)]
pub struct WireReport {
    pub project_dir: PathBuf,
    pub provider_class: String,
    pub wiring: Wiring,
    /// Written provider file.
    pub provider: Option<PathBuf>,
}

impl Report for WireReport {
    fn render(&self, out: &mut dyn Output) {
        if self.wiring.bindings.is_empty() {
            out.preformatted("No models registered in repokit.toml.");
        } else {
            self.render_plan(out);
        }

        if let Some(path) = &self.provider {
            out.newline();
            out.section(&self.provider_class);
            out.added_item(&display_path(&self.project_dir, path));
        }
    }
}

impl WireReport {
    fn render_plan(&self, out: &mut dyn Output) {
        out.section("Bindings");
        for planned in &self.wiring.bindings {
            let binding = &planned.binding;
            match &planned.state {
                BindingState::Active => {
                    out.list_item(&format!("{} => {}", binding.contract, binding.repository))
                }
                BindingState::Skipped { .. } => {
                    out.list_item(&format!("{} (skipped)", binding.contract))
                }
            }
        }

        out.newline();
        out.section("Events");
        for (event, listeners) in &self.wiring.listen {
            out.key_value_indented(event, &listeners.join(", "));
        }

        for diagnostic in &self.wiring.diagnostics {
            out.warning(&diagnostic.message);
        }
    }
}
