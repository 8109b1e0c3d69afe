//! Check operation - config validation and artifact state of registered models.

use std::path::Path;

use repokit_codegen::{ArtifactKind, ConventionMapper, ModelIdentifier, Result};
use repokit_config::RepoToml;
use repokit_core::{LocalFs, Role};

use crate::reports::{CheckReport, FolderInfo, ModelStatus};

/// Execute the check operation.
///
/// The configuration is already validated when loaded; this resolves every
/// registered model and looks up which of its files exist.
pub fn check(repo_toml: &RepoToml, project_dir: &Path) -> Result<CheckReport> {
    let config = repo_toml.config();
    let mapper = ConventionMapper::new(config, project_dir);

    let folders = Role::ALL
        .into_iter()
        .map(|role| FolderInfo {
            role,
            folder: mapper.role_folder(role).to_path_buf(),
            namespace: mapper.role_namespace(role).to_string(),
        })
        .collect();

    let mut models = Vec::new();
    for raw in &config.models {
        let model = ModelIdentifier::resolve(raw)?;
        let repository_set = ArtifactKind::repository_set();
        let present = repository_set
            .iter()
            .filter(|kind| mapper.artifact_exists(**kind, &model, &LocalFs))
            .count();

        models.push(ModelStatus {
            class: mapper.model_class(&model),
            model_exists: mapper.model_exists(&model, &LocalFs),
            repository_files: (present, repository_set.len()),
            filter_exists: mapper.artifact_exists(ArtifactKind::Filter, &model, &LocalFs),
            getter_exists: mapper.artifact_exists(ArtifactKind::Getter, &model, &LocalFs),
            name: model.namespaced(),
        });
    }

    Ok(CheckReport {
        config_path: repo_toml.path().to_path_buf(),
        found: repo_toml.is_found(),
        folders,
        models,
    })
}
