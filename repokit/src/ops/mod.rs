//! Core operations.
//!
//! This module contains the business logic for repokit commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod scaffold;
pub mod wire;

pub use check::check;
pub use scaffold::scaffold;
pub use wire::wire;
