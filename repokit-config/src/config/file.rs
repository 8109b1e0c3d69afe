use std::path::{Path, PathBuf};

use super::Config;
use crate::Result;

/// Represents a repokit.toml file and its parsed configuration.
pub struct RepoToml {
    path: PathBuf,
    config: Config,
    found: bool,
}

impl RepoToml {
    /// Open and parse a repokit.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            config,
            found: true,
        })
    }

    /// Open a repokit.toml file, falling back to the default configuration
    /// when nothing exists at the path.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        Ok(Self {
            path: path.to_path_buf(),
            config: Config::default(),
            found: false,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the configuration was read from disk.
    pub fn is_found(&self) -> bool {
        self.found
    }
}
