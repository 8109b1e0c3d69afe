//! Stub templates and placeholder substitution.
//!
//! Every artifact kind has a built-in stub. A project can override any of
//! them by dropping `<StubName>.stub` into its stub directory.

use std::{collections::BTreeMap, path::Path};

use indexmap::IndexMap;
use repokit_core::{File, FileStore, WriteResult};

use crate::{ArtifactKind, Error, Result, Stage, WriteOutcome};

/// Name of the stub used for the generated service provider.
pub const PROVIDER_STUB: &str = "ServiceProvider";

/// File extension of stub files.
pub const STUB_EXTENSION: &str = "stub";

/// Built-in stub content for an artifact kind.
pub fn builtin_stub(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Contract => include_str!("../stubs/RepositoryContract.stub"),
        ArtifactKind::Repository => include_str!("../stubs/Repository.stub"),
        ArtifactKind::Event(stage) => match stage {
            Stage::IsCreating => include_str!("../stubs/IsCreatingEvent.stub"),
            Stage::IsUpdating => include_str!("../stubs/IsUpdatingEvent.stub"),
            Stage::IsDeleting => include_str!("../stubs/IsDeletingEvent.stub"),
            Stage::WasCreated => include_str!("../stubs/WasCreatedEvent.stub"),
            Stage::WasUpdated => include_str!("../stubs/WasUpdatedEvent.stub"),
            Stage::WasDeleted => include_str!("../stubs/WasDeletedEvent.stub"),
        },
        ArtifactKind::Listener(stage) => match stage {
            Stage::IsCreating => include_str!("../stubs/IsCreatingListener.stub"),
            Stage::IsUpdating => include_str!("../stubs/IsUpdatingListener.stub"),
            Stage::IsDeleting => include_str!("../stubs/IsDeletingListener.stub"),
            Stage::WasCreated => include_str!("../stubs/WasCreatedListener.stub"),
            Stage::WasUpdated => include_str!("../stubs/WasUpdatedListener.stub"),
            Stage::WasDeleted => include_str!("../stubs/WasDeletedListener.stub"),
        },
        ArtifactKind::Filter => include_str!("../stubs/Filter.stub"),
        ArtifactKind::Getter => include_str!("../stubs/Getter.stub"),
    }
}

/// Built-in service provider stub.
pub fn builtin_provider_stub() -> &'static str {
    include_str!("../stubs/ServiceProvider.stub")
}

/// Copy every built-in stub into `dir`, keeping stubs that already exist.
pub fn publish_builtin(dir: &Path, store: &dyn FileStore) -> Result<Vec<WriteOutcome>> {
    let stubs = ArtifactKind::all()
        .into_iter()
        .map(|kind| (kind.stub_name(), builtin_stub(kind)))
        .chain(std::iter::once((PROVIDER_STUB, builtin_provider_stub())));

    let mut outcomes = Vec::new();
    for (name, content) in stubs {
        let path = dir.join(format!("{}.{}", name, STUB_EXTENSION));
        let result = File::new(&path, content)
            .if_missing()
            .write(store)
            .map_err(|e| Error::filesystem(&path, e))?;
        outcomes.push(match result {
            WriteResult::Written => WriteOutcome::Created(path),
            WriteResult::Skipped => WriteOutcome::Skipped(path),
        });
    }
    Ok(outcomes)
}

/// The set of stubs in use: built-ins plus project overrides.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    overrides: BTreeMap<String, String>,
}

impl Templates {
    /// Built-in stubs only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load overrides from a stub directory. Missing stubs fall back to built-ins.
    ///
    /// A stub that exists but cannot be read is a filesystem error.
    pub fn load(dir: &Path, store: &dyn FileStore) -> Result<Self> {
        let mut templates = Self::builtin();
        if !store.exists(dir) {
            return Ok(templates);
        }

        let names = ArtifactKind::all()
            .into_iter()
            .map(|kind| kind.stub_name())
            .chain(std::iter::once(PROVIDER_STUB));

        for name in names {
            let path = dir.join(format!("{}.{}", name, STUB_EXTENSION));
            if store.exists(&path) {
                let content = store
                    .read_to_string(&path)
                    .map_err(|e| Error::filesystem(&path, e))?;
                templates.overrides.insert(name.to_string(), content);
            }
        }

        Ok(templates)
    }

    /// Override a single stub.
    pub fn with_override(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), content.into());
        self
    }

    /// Stub used for an artifact kind.
    pub fn for_kind(&self, kind: ArtifactKind) -> &str {
        self.overrides
            .get(kind.stub_name())
            .map(String::as_str)
            .unwrap_or_else(|| builtin_stub(kind))
    }

    /// Stub used for the service provider.
    pub fn provider(&self) -> &str {
        self.overrides
            .get(PROVIDER_STUB)
            .map(String::as_str)
            .unwrap_or_else(|| builtin_provider_stub())
    }
}

/// Placeholder values for a template, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: IndexMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value. `name` is given without braces.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Replace every known `{{name}}` in `template`.
    ///
    /// Each placeholder is substituted literally, in insertion order. Unknown
    /// placeholders are left verbatim.
    pub fn render(&self, template: &str) -> String {
        self.values
            .iter()
            .fold(template.to_string(), |out, (name, value)| {
                out.replace(&format!("{{{{{}}}}}", name), value)
            })
    }
}
