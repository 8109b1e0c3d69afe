//! Backing file stores.
//!
//! Generators never touch `std::fs` directly. They go through a [`FileStore`]
//! so that existence checks and writes can be pointed at a real project
//! directory or at an in-memory tree in tests.

use std::{io, path::Path};

/// Filesystem operations needed by the generators.
pub trait FileStore {
    /// Check if a file or directory exists at the given path.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a file, replacing any previous content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create a directory and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryFs;

#[cfg(any(test, feature = "testing"))]
mod memory {
    use std::{
        cell::RefCell,
        collections::{BTreeMap, BTreeSet},
        io,
        path::{Path, PathBuf},
    };

    use super::FileStore;

    /// In-memory file store for tests.
    ///
    /// Writes under a denied prefix fail with `PermissionDenied`.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        files: RefCell<BTreeMap<PathBuf, String>>,
        dirs: RefCell<BTreeSet<PathBuf>>,
        denied: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a file, creating its parent directories.
        pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
            let path = path.into();
            if let Some(parent) = path.parent() {
                self.insert_dirs(parent);
            }
            self.files.borrow_mut().insert(path, content.into());
            self
        }

        /// Make every write or mkdir under `prefix` fail.
        pub fn deny(&self, prefix: impl Into<PathBuf>) {
            self.denied.borrow_mut().push(prefix.into());
        }

        /// Paths of all stored files, sorted.
        pub fn files(&self) -> Vec<PathBuf> {
            self.files.borrow().keys().cloned().collect()
        }

        /// Content of a stored file.
        pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.borrow().get(path.as_ref()).cloned()
        }

        fn check_allowed(&self, path: &Path) -> io::Result<()> {
            if self.denied.borrow().iter().any(|p| path.starts_with(p)) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("permission denied: {}", path.display()),
                ));
            }
            Ok(())
        }

        fn insert_dirs(&self, path: &Path) {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in path.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    impl FileStore for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )
            })
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            self.check_allowed(path)?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !self.dirs.borrow().contains(parent) {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("parent directory missing: {}", parent.display()),
                    ));
                }
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.check_allowed(path)?;
            self.insert_dirs(path);
            Ok(())
        }
    }
}
