//! Scaffolding of repository, event, filter and getter classes.
//!
//! This crate maps model names to PHP artifact locations and writes the
//! stubs for them.
//!
//! # Module Organization
//!
//! - [`model`] - Model name resolution (ModelIdentifier)
//! - [`artifact`] - Artifact kinds and lifecycle stages
//! - [`convention`] - Folder and namespace conventions (ConventionMapper)
//! - [`template`] - Stubs and placeholder substitution
//! - [`scaffold`] - Scaffold batches and their outcomes
//! - [`wiring`] - Repository bindings and the event listener map

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod artifact;
pub mod convention;
pub mod diagnostic;
mod error;
pub mod model;
pub mod scaffold;
pub mod template;
pub mod wiring;

pub use artifact::{ArtifactKind, ArtifactSpec, Stage};
pub use convention::ConventionMapper;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::{Error, Result};
pub use model::{ModelIdentifier, resolve};
pub use scaffold::{
    Aborted, ArtifactOutcome, Scaffold, ScaffoldKind, ScaffoldReport, WriteOutcome,
};
pub use template::{Placeholders, Templates, publish_builtin};
pub use wiring::{Binding, BindingState, EventListener, EventListenerSet, PlannedBinding, Wiring};
