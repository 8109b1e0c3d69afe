//! Configuration types and parsing for repokit.toml files.

mod app;
mod file;
mod folders;
mod parse;
mod validate;

pub use app::AppConfig;
pub use file::RepoToml;
pub use folders::FolderConfig;
use repokit_core::to_namespace_format;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root configuration for repokit.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Models registered for automatic binding and event-listener registration.
    /// Entries may use either separator, e.g. "Foo/Bar" or "Foo\\Bar".
    #[serde(default)]
    pub models: Vec<String>,

    /// Application layout
    #[serde(default)]
    pub app: AppConfig,

    /// Folder leaf per role
    #[serde(default)]
    pub folders: FolderConfig,
}

impl Config {
    /// Check if a model is registered (separator-insensitive).
    pub fn is_registered(&self, model: &str) -> bool {
        let wanted = to_namespace_format(model);
        self.models
            .iter()
            .any(|registered| to_namespace_format(registered) == wanted)
    }
}
