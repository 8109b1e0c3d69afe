//! Integration tests that scaffold into a real project directory.

use std::{fs, path::Path, str::FromStr};

use repokit_codegen::{
    ArtifactKind, ConventionMapper, ModelIdentifier, Scaffold, Templates, Wiring, WriteOutcome,
};
use repokit_config::Config;
use repokit_core::{FileStore, LocalFs, Role};
use tempfile::TempDir;

fn files_under(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).expect("Failed to read dir") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let relative = path.strip_prefix(root).expect("Path outside root");
                out.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = Vec::new();
    if root.exists() {
        walk(root, root, &mut out);
    }
    out.sort();
    out
}

fn scaffold(
    kind: Scaffold,
    raw: &str,
    config: &Config,
    project: &Path,
) -> repokit_codegen::ScaffoldReport {
    let model = ModelIdentifier::resolve(raw).expect("Failed to resolve model");
    let mapper = ConventionMapper::new(config, project);
    let templates = Templates::load(mapper.stubs_dir(), &LocalFs).expect("Failed to load stubs");
    kind.run(&model, &mapper, config, &templates, &LocalFs)
        .expect("Failed to scaffold")
}

#[test]
fn test_repository_for_plain_model() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::default();

    let report = scaffold(Scaffold::repository(), "Invoice", &config, temp.path());

    assert_eq!(report.created().count(), 14);
    let contract = temp
        .path()
        .join("app/Contracts/InvoiceRepositoryContract.php");
    let repository = temp.path().join("app/Repositories/InvoiceRepository.php");
    assert!(contract.exists());
    assert!(repository.exists());

    let content = fs::read_to_string(&repository).expect("Failed to read repository");
    assert!(content.contains("class InvoiceRepository extends AbstractEloquentRepository"));
    assert!(content.contains("use App\\Contracts\\InvoiceRepositoryContract;"));
    assert!(content.contains("use App\\Models\\Invoice;"));
    assert!(!content.contains("{{modelName}}"));
}

#[test]
fn test_repository_for_nested_model() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::default();

    let report = scaffold(
        Scaffold::repository(),
        "Accounting/Invoice",
        &config,
        temp.path(),
    );

    for artifact in &report.artifacts {
        assert!(
            artifact.class.contains("\\Accounting\\"),
            "{} is not nested",
            artifact.class
        );
    }
    let files = files_under(&temp.path().join("app"));
    assert!(files.contains(&"Contracts/Accounting/InvoiceRepositoryContract.php".to_string()));
    assert!(files.contains(&"Repositories/Accounting/InvoiceRepository.php".to_string()));
    assert!(files.contains(&"Events/Accounting/InvoiceWasCreatedEvent.php".to_string()));

    let contract = fs::read_to_string(
        temp.path()
            .join("app/Contracts/Accounting/InvoiceRepositoryContract.php"),
    )
    .expect("Failed to read contract");
    assert!(contract.contains("namespace App\\Contracts\\Accounting;"));
}

#[test]
fn test_second_run_skips_everything() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::default();

    scaffold(Scaffold::repository(), "Invoice", &config, temp.path());
    let before = files_under(temp.path());
    let report = scaffold(Scaffold::repository(), "Invoice", &config, temp.path());
    let after = files_under(temp.path());

    assert_eq!(before, after);
    assert_eq!(report.created().count(), 0);
    assert_eq!(report.skipped().count(), 14);
}

#[test]
fn test_existing_contract_is_kept() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::default();
    let contract = temp
        .path()
        .join("app/Contracts/InvoiceRepositoryContract.php");
    fs::create_dir_all(contract.parent().unwrap()).unwrap();
    fs::write(&contract, "<?php // hand written").unwrap();

    let report = scaffold(Scaffold::repository(), "Invoice", &config, temp.path());

    assert_eq!(report.artifacts[0].kind, ArtifactKind::Contract);
    assert_eq!(report.artifacts[0].outcome, WriteOutcome::Skipped(contract.clone()));
    assert_eq!(report.created().count(), 13);
    assert_eq!(
        fs::read_to_string(&contract).unwrap(),
        "<?php // hand written"
    );
}

#[test]
fn test_configured_folders() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::from_str(
        r#"
        [folders]
        repositories = "Repo"
        "#,
    )
    .expect("Failed to parse config");
    let mapper = ConventionMapper::new(&config, temp.path());

    assert_eq!(mapper.folder_leaf(Role::Repositories), "Repo");
    assert_eq!(mapper.folder_leaf(Role::Events), "Events");

    scaffold(Scaffold::repository(), "Invoice", &config, temp.path());

    assert!(temp.path().join("app/Repo/InvoiceRepository.php").exists());
    assert!(
        temp.path()
            .join("app/Events/InvoiceIsCreatingEvent.php")
            .exists()
    );
}

#[test]
fn test_project_stub_override() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let stubs = temp.path().join("stubs/repokit");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(
        stubs.join("Filter.stub"),
        "<?php // {{modelName}} in {{filtersNamespace}} {{unknown}}",
    )
    .unwrap();

    scaffold(Scaffold::filter(), "Invoice", &Config::default(), temp.path());

    let filter = fs::read_to_string(temp.path().join("app/Filters/InvoiceFilter.php")).unwrap();
    assert_eq!(filter, "<?php // Invoice in App\\Filters {{unknown}}");
}

#[test]
fn test_wire_after_scaffold() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::from_str(r#"models = ["Invoice", "Order"]"#).expect("Failed to parse");
    let mapper = ConventionMapper::new(&config, temp.path());

    fs::create_dir_all(temp.path().join("app/Models")).unwrap();
    fs::write(temp.path().join("app/Models/Invoice.php"), "<?php").unwrap();
    scaffold(Scaffold::repository(), "Invoice", &config, temp.path());

    let wiring = Wiring::plan(&mapper, &config, &LocalFs).expect("Failed to plan");
    assert!(wiring.bindings[0].is_active());
    assert!(!wiring.bindings[1].is_active());

    let path = wiring
        .write_provider(&mapper, &Templates::builtin(), &LocalFs)
        .expect("Failed to write provider");
    let provider = LocalFs.read_to_string(&path).unwrap();
    assert!(provider.contains(
        "\\App\\Contracts\\InvoiceRepositoryContract::class => \\App\\Repositories\\InvoiceRepository::class,"
    ));
    assert!(!provider.contains("OrderRepositoryContract"));
    assert!(provider.contains("\\App\\Events\\OrderWasDeletedEvent::class => ["));
}
