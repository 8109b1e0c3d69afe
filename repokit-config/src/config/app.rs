use serde::Deserialize;

/// Application layout settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Application root folder, relative to the project directory
    #[serde(default = "default_root")]
    pub root: String,

    /// Root namespace of the application
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Extension of generated class files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Folder with stub overrides, relative to the project directory
    #[serde(default = "default_stubs")]
    pub stubs: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            namespace: default_namespace(),
            extension: default_extension(),
            stubs: default_stubs(),
        }
    }
}

fn default_root() -> String {
    "app".to_string()
}

fn default_namespace() -> String {
    "App".to_string()
}

fn default_extension() -> String {
    "php".to_string()
}

fn default_stubs() -> String {
    "stubs/repokit".to_string()
}
