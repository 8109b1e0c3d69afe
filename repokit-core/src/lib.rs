//! Core utilities and types for the repokit scaffolding generator.
//!
//! This crate provides the folder roles, naming utilities and file store
//! abstraction shared by the other repokit crates.

mod file;
mod role;
mod store;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Folder roles
pub use role::Role;
// File stores
#[cfg(any(test, feature = "testing"))]
pub use store::MemoryFs;
pub use store::{FileStore, LocalFs};
// String utilities
pub use utils::{
    NAMESPACE_SEPARATOR, PATH_SEPARATOR, PHP_RESERVED_WORDS, capitalize, is_reserved_word,
    is_separator, to_namespace_format, to_path_format, validate_identifier,
};
