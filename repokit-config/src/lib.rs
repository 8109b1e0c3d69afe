//! Configuration parsing and validation for the repokit scaffolding generator.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;

pub use config::{AppConfig, Config, FolderConfig, ParseContext, RepoToml};
pub use error::{Error, Result, SourceContext};

/// Content written by `repokit init`.
pub const DEFAULT_CONFIG: &str = r#"# Models registered for automatic repository binding and
# event-listener registration, e.g. "Invoice" or "Accounting/Invoice".
models = [
    # "MyModel",
    # "Foo/Bar",
]

[app]
# Application root, relative to the project directory.
root = "app"
# Root namespace of the application.
namespace = "App"
# Extension of generated class files.
extension = "php"
# Stub overrides, relative to the project directory.
stubs = "stubs/repokit"

# Target folders, relative to the application root.
# Missing folders are created automatically.
# Subfolders (e.g. "Repositories/Eloquent") can also be used.
[folders]
models = "Models"
contracts = "Contracts"
repositories = "Repositories"
events = "Events"
listeners = "Listeners"
getters = "Getters"
filters = "Filters"
"#;
