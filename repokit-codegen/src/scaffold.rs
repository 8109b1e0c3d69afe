//! Scaffold batches: the set of artifacts generated by one command.

use std::path::{Path, PathBuf};

use repokit_config::Config;
use repokit_core::FileStore;
use serde::Serialize;

use crate::{
    ArtifactKind, ConventionMapper, Diagnostic, DiagnosticKind, Error, ModelIdentifier, Templates,
};

/// Outcome of writing one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "lowercase")]
pub enum WriteOutcome {
    Created(PathBuf),
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Created(path) | WriteOutcome::Skipped(path) => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, WriteOutcome::Created(_))
    }
}

/// Which group of artifacts a scaffold produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldKind {
    Repository,
    Filter,
    Getter,
}

impl ScaffoldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaffoldKind::Repository => "repository",
            ScaffoldKind::Filter => "filter",
            ScaffoldKind::Getter => "getter",
        }
    }

    /// Artifacts of this scaffold, in write order.
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        match self {
            ScaffoldKind::Repository => ArtifactKind::repository_set(),
            ScaffoldKind::Filter => vec![ArtifactKind::Filter],
            ScaffoldKind::Getter => vec![ArtifactKind::Getter],
        }
    }

    /// Getters are never bound, so their model need not be registered.
    fn requires_registration(&self) -> bool {
        !matches!(self, ScaffoldKind::Getter)
    }
}

/// Result of one artifact in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub class: String,
    pub outcome: WriteOutcome,
    /// Rendered stub, kept only in dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Result of a whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub kind: ScaffoldKind,
    pub model: ModelIdentifier,
    pub dry_run: bool,
    pub artifacts: Vec<ArtifactOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScaffoldReport {
    pub fn created(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| a.outcome.is_created())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| !a.outcome.is_created())
    }
}

/// A batch stopped by a fatal error.
///
/// `report` holds the artifacts handled before the failing one.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Aborted {
    pub report: Box<ScaffoldReport>,
    #[source]
    pub error: Error,
}

/// A batch of artifacts for one model.
#[derive(Debug, Clone)]
pub struct Scaffold {
    kind: ScaffoldKind,
    dry_run: bool,
}

impl Scaffold {
    pub fn new(kind: ScaffoldKind) -> Self {
        Self {
            kind,
            dry_run: false,
        }
    }

    /// Contract, repository and the twelve lifecycle classes.
    pub fn repository() -> Self {
        Self::new(ScaffoldKind::Repository)
    }

    pub fn filter() -> Self {
        Self::new(ScaffoldKind::Filter)
    }

    pub fn getter() -> Self {
        Self::new(ScaffoldKind::Getter)
    }

    /// Render every artifact without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Write the batch sequentially.
    ///
    /// Existing files are skipped. The first filesystem error aborts the
    /// batch; files written before it stay on disk and are listed in the
    /// aborted report.
    pub fn run(
        &self,
        model: &ModelIdentifier,
        mapper: &ConventionMapper,
        config: &Config,
        templates: &Templates,
        store: &dyn FileStore,
    ) -> Result<ScaffoldReport, Aborted> {
        let mut report = ScaffoldReport {
            kind: self.kind,
            model: model.clone(),
            dry_run: self.dry_run,
            artifacts: Vec::new(),
            diagnostics: Vec::new(),
        };

        for kind in self.kind.artifacts() {
            let spec = mapper.resolve_artifact(kind, model);
            let (outcome, content) = if self.dry_run {
                let content = mapper.render_artifact(kind, model, templates);
                let outcome = if store.exists(&spec.file) {
                    WriteOutcome::Skipped(spec.file)
                } else {
                    WriteOutcome::Created(spec.file)
                };
                (outcome, Some(content))
            } else {
                match mapper.write_artifact(kind, model, templates, store) {
                    Ok(outcome) => (outcome, None),
                    Err(Error::AlreadyExists { path }) => (WriteOutcome::Skipped(path), None),
                    Err(error) => {
                        return Err(Aborted {
                            report: Box::new(report),
                            error,
                        });
                    }
                }
            };

            report.artifacts.push(ArtifactOutcome {
                kind,
                class: spec.fully_qualified_name,
                outcome,
                content,
            });
        }

        report.diagnostics = self.diagnostics(model, mapper, config, store);
        Ok(report)
    }

    fn diagnostics(
        &self,
        model: &ModelIdentifier,
        mapper: &ConventionMapper,
        config: &Config,
        store: &dyn FileStore,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if !mapper.model_exists(model, store) {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::ModelMissing,
                    format!(
                        "model class `{}` does not exist yet, don't forget to create it",
                        mapper.model_class(model)
                    ),
                )
                .at(mapper.model_file(model).display().to_string()),
            );
        }

        if self.kind.requires_registration() && !config.is_registered(&model.namespaced()) {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::ModelNotRegistered,
                format!(
                    "model `{}` is not registered, add it to `models` in repokit.toml to bind it",
                    model
                ),
            ));
        }

        diagnostics
    }
}
