//! Generated artifact kinds and their naming tables.

use std::{fmt, path::PathBuf};

use repokit_core::Role;
use serde::Serialize;

/// Model lifecycle stages that get an event and a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    IsCreating,
    IsUpdating,
    IsDeleting,
    WasCreated,
    WasUpdated,
    WasDeleted,
}

impl Stage {
    /// All stages, in generation order.
    pub const ALL: [Stage; 6] = [
        Stage::IsCreating,
        Stage::IsUpdating,
        Stage::IsDeleting,
        Stage::WasCreated,
        Stage::WasUpdated,
        Stage::WasDeleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::IsCreating => "IsCreating",
            Stage::IsUpdating => "IsUpdating",
            Stage::IsDeleting => "IsDeleting",
            Stage::WasCreated => "WasCreated",
            Stage::WasUpdated => "WasUpdated",
            Stage::WasDeleted => "WasDeleted",
        }
    }

    /// Class name suffix of the event for this stage.
    pub fn event_suffix(&self) -> &'static str {
        match self {
            Stage::IsCreating => "IsCreatingEvent",
            Stage::IsUpdating => "IsUpdatingEvent",
            Stage::IsDeleting => "IsDeletingEvent",
            Stage::WasCreated => "WasCreatedEvent",
            Stage::WasUpdated => "WasUpdatedEvent",
            Stage::WasDeleted => "WasDeletedEvent",
        }
    }

    /// Class name suffix of the listener for this stage.
    pub fn listener_suffix(&self) -> &'static str {
        match self {
            Stage::IsCreating => "IsCreatingListener",
            Stage::IsUpdating => "IsUpdatingListener",
            Stage::IsDeleting => "IsDeletingListener",
            Stage::WasCreated => "WasCreatedListener",
            Stage::WasUpdated => "WasUpdatedListener",
            Stage::WasDeleted => "WasDeletedListener",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A kind of generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
    Contract,
    Repository,
    Event(Stage),
    Listener(Stage),
    Filter,
    Getter,
}

impl ArtifactKind {
    /// Folder role the artifact is placed under.
    pub fn role(&self) -> Role {
        match self {
            ArtifactKind::Contract => Role::Contracts,
            ArtifactKind::Repository => Role::Repositories,
            ArtifactKind::Event(_) => Role::Events,
            ArtifactKind::Listener(_) => Role::Listeners,
            ArtifactKind::Filter => Role::Filters,
            ArtifactKind::Getter => Role::Getters,
        }
    }

    /// Suffix appended to the model base name to form the class name.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Contract => "RepositoryContract",
            ArtifactKind::Repository => "Repository",
            ArtifactKind::Event(stage) => stage.event_suffix(),
            ArtifactKind::Listener(stage) => stage.listener_suffix(),
            ArtifactKind::Filter => "Filter",
            ArtifactKind::Getter => "Getter",
        }
    }

    /// Name of the stub template used for this artifact.
    ///
    /// Stubs are named after the suffix, so `Repository.stub` renders
    /// `<Model>Repository`.
    pub fn stub_name(&self) -> &'static str {
        self.suffix()
    }

    /// Short human-readable label (e.g., "contract", "IsCreating event").
    pub fn label(&self) -> String {
        match self {
            ArtifactKind::Contract => "contract".to_string(),
            ArtifactKind::Repository => "repository".to_string(),
            ArtifactKind::Event(stage) => format!("{} event", stage),
            ArtifactKind::Listener(stage) => format!("{} listener", stage),
            ArtifactKind::Filter => "filter".to_string(),
            ArtifactKind::Getter => "getter".to_string(),
        }
    }

    /// Contract, repository and every lifecycle event/listener pair.
    pub fn repository_set() -> Vec<ArtifactKind> {
        let mut kinds = vec![ArtifactKind::Contract, ArtifactKind::Repository];
        for stage in Stage::ALL {
            kinds.push(ArtifactKind::Event(stage));
            kinds.push(ArtifactKind::Listener(stage));
        }
        kinds
    }

    /// Every artifact kind that has a stub.
    pub fn all() -> Vec<ArtifactKind> {
        let mut kinds = Self::repository_set();
        kinds.push(ArtifactKind::Filter);
        kinds.push(ArtifactKind::Getter);
        kinds
    }
}

/// Computed location and names of one artifact for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    /// Folder that contains the file
    pub folder: PathBuf,
    /// Full file path
    pub file: PathBuf,
    /// Namespace that contains the class
    pub namespace: String,
    /// Class name without namespace
    pub class_name: String,
    /// Class name with namespace
    pub fully_qualified_name: String,
}
