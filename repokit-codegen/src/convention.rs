//! Folder and namespace conventions for generated artifacts.

use std::path::{Path, PathBuf};

use repokit_config::Config;
use repokit_core::{
    File, FileStore, NAMESPACE_SEPARATOR, PATH_SEPARATOR, Role, WriteResult, is_separator,
    to_namespace_format, to_path_format,
};

use crate::{
    ArtifactKind, ArtifactSpec, Binding, Error, EventListener, EventListenerSet, ModelIdentifier,
    Placeholders, Result, Stage, Templates, WriteOutcome,
};

/// Folder leaf that holds the generated service provider.
pub const PROVIDERS_LEAF: &str = "Providers";

/// Class name of the generated service provider.
pub const PROVIDER_NAME: &str = "RepositoryBindingServiceProvider";

/// Where a role's artifacts live on disk and in the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RoleLocation {
    leaf: String,
    folder: PathBuf,
    namespace: String,
}

/// Maps models to artifact locations.
///
/// All role folders and namespaces are computed once, at construction.
#[derive(Debug, Clone)]
pub struct ConventionMapper {
    app_root: PathBuf,
    root_namespace: String,
    extension: String,
    stubs_dir: PathBuf,
    locations: [RoleLocation; 7],
}

impl ConventionMapper {
    pub fn new(config: &Config, project_root: impl AsRef<Path>) -> Self {
        let project_root = project_root.as_ref();
        let app_root = push_segments(project_root.to_path_buf(), &config.app.root);
        let root_namespace = to_namespace_format(&config.app.namespace)
            .trim_matches(is_separator)
            .to_string();

        let locations = Role::ALL.map(|role| {
            let leaf = config.folders.leaf(role);
            RoleLocation {
                folder: push_segments(app_root.clone(), &leaf),
                namespace: join_namespace(&root_namespace, &leaf),
                leaf,
            }
        });

        Self {
            stubs_dir: push_segments(project_root.to_path_buf(), &config.app.stubs),
            extension: config.app.extension.clone(),
            app_root,
            root_namespace,
            locations,
        }
    }

    fn location(&self, role: Role) -> &RoleLocation {
        &self.locations[role as usize]
    }

    /// Configured (or default) folder leaf of a role.
    pub fn folder_leaf(&self, role: Role) -> &str {
        &self.location(role).leaf
    }

    /// Folder of a role, without any model prefix.
    pub fn role_folder(&self, role: Role) -> &Path {
        &self.location(role).folder
    }

    /// Namespace of a role, without any model prefix.
    pub fn role_namespace(&self, role: Role) -> &str {
        &self.location(role).namespace
    }

    /// Namespace a model's artifact of the given role lives in.
    pub fn namespace_for(&self, role: Role, model: &ModelIdentifier) -> String {
        let mut namespace = self.role_namespace(role).to_string();
        if let Some(suffix) = model.namespace_suffix() {
            namespace.push_str(suffix);
        }
        namespace
    }

    /// Folder a model's artifact of the given role lives in.
    pub fn folder_for(&self, role: Role, model: &ModelIdentifier) -> PathBuf {
        let folder = self.role_folder(role).to_path_buf();
        match model.path_suffix() {
            Some(suffix) => push_segments(folder, suffix),
            None => folder,
        }
    }

    /// Compute folder, file and names of one artifact.
    pub fn resolve_artifact(&self, kind: ArtifactKind, model: &ModelIdentifier) -> ArtifactSpec {
        let role = kind.role();
        let folder = self.folder_for(role, model);
        let namespace = self.namespace_for(role, model);
        let class_name = format!("{}{}", model.base_name(), kind.suffix());

        ArtifactSpec {
            kind,
            file: folder.join(self.file_name(&class_name)),
            fully_qualified_name: format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, class_name),
            folder,
            namespace,
            class_name,
        }
    }

    /// Fully qualified name of the model class.
    pub fn model_class(&self, model: &ModelIdentifier) -> String {
        format!(
            "{}{}{}",
            self.namespace_for(Role::Models, model),
            NAMESPACE_SEPARATOR,
            model.base_name()
        )
    }

    /// Conventional file of the model class.
    pub fn model_file(&self, model: &ModelIdentifier) -> PathBuf {
        self.folder_for(Role::Models, model)
            .join(self.file_name(model.base_name()))
    }

    pub fn artifact_exists(
        &self,
        kind: ArtifactKind,
        model: &ModelIdentifier,
        store: &dyn FileStore,
    ) -> bool {
        store.exists(&self.resolve_artifact(kind, model).file)
    }

    pub fn model_exists(&self, model: &ModelIdentifier, store: &dyn FileStore) -> bool {
        store.exists(&self.model_file(model))
    }

    /// Placeholder values for every stub rendered for `model`.
    pub fn placeholders(&self, model: &ModelIdentifier) -> Placeholders {
        let mut placeholders = Placeholders::new()
            .set("modelName", model.base_name())
            .set("modelClass", self.model_class(model));
        for role in Role::ALL {
            placeholders = placeholders.set(
                format!("{}Namespace", role.as_str()),
                self.namespace_for(role, model),
            );
        }
        placeholders
    }

    /// Render the stub of an artifact for `model`.
    pub fn render_artifact(
        &self,
        kind: ArtifactKind,
        model: &ModelIdentifier,
        templates: &Templates,
    ) -> String {
        self.placeholders(model).render(templates.for_kind(kind))
    }

    /// Write one artifact. Existing files are never overwritten.
    pub fn write_artifact(
        &self,
        kind: ArtifactKind,
        model: &ModelIdentifier,
        templates: &Templates,
        store: &dyn FileStore,
    ) -> Result<WriteOutcome> {
        let spec = self.resolve_artifact(kind, model);
        let content = self.render_artifact(kind, model, templates);

        let file = File::new(&spec.file, content).if_missing();
        match file
            .write(store)
            .map_err(|e| Error::filesystem(&spec.file, e))?
        {
            WriteResult::Written => Ok(WriteOutcome::Created(spec.file)),
            WriteResult::Skipped => Err(Error::AlreadyExists { path: spec.file }),
        }
    }

    /// Event and listener classes of every lifecycle stage.
    pub fn event_listener_set(&self, model: &ModelIdentifier) -> EventListenerSet {
        let entries = Stage::ALL
            .into_iter()
            .map(|stage| EventListener {
                stage,
                event: self
                    .resolve_artifact(ArtifactKind::Event(stage), model)
                    .fully_qualified_name,
                listener: self
                    .resolve_artifact(ArtifactKind::Listener(stage), model)
                    .fully_qualified_name,
            })
            .collect();
        EventListenerSet::new(model.namespaced(), entries)
    }

    /// Contract to repository binding.
    pub fn binding(&self, model: &ModelIdentifier) -> Binding {
        Binding {
            model: model.namespaced(),
            contract: self
                .resolve_artifact(ArtifactKind::Contract, model)
                .fully_qualified_name,
            repository: self
                .resolve_artifact(ArtifactKind::Repository, model)
                .fully_qualified_name,
        }
    }

    /// Folder with stub overrides.
    pub fn stubs_dir(&self) -> &Path {
        &self.stubs_dir
    }

    /// File of the generated service provider.
    pub fn provider_file(&self) -> PathBuf {
        self.app_root
            .join(PROVIDERS_LEAF)
            .join(self.file_name(PROVIDER_NAME))
    }

    /// Namespace of the generated service provider.
    pub fn provider_namespace(&self) -> String {
        join_namespace(&self.root_namespace, PROVIDERS_LEAF)
    }

    /// Fully qualified name of the generated service provider.
    pub fn provider_class(&self) -> String {
        format!(
            "{}{}{}",
            self.provider_namespace(),
            NAMESPACE_SEPARATOR,
            PROVIDER_NAME
        )
    }

    fn file_name(&self, class_name: &str) -> String {
        format!("{}.{}", class_name, self.extension)
    }
}

/// Append every segment of a `/` or `\` separated string to a path.
fn push_segments(mut path: PathBuf, segments: &str) -> PathBuf {
    for segment in to_path_format(segments)
        .split(PATH_SEPARATOR)
        .filter(|s| !s.is_empty())
    {
        path.push(segment);
    }
    path
}

fn join_namespace(root: &str, leaf: &str) -> String {
    let leaf = to_namespace_format(leaf);
    let leaf = leaf.trim_matches(is_separator);
    if root.is_empty() {
        leaf.to_string()
    } else {
        format!("{}{}{}", root, NAMESPACE_SEPARATOR, leaf)
    }
}
