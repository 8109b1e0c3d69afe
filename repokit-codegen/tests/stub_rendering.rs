//! Snapshot and failure tests for rendered stubs.

use std::path::PathBuf;

use repokit_codegen::{
    ArtifactKind, ConventionMapper, Error, ModelIdentifier, Scaffold, Stage, Templates,
};
use repokit_config::Config;
use repokit_core::MemoryFs;

fn render(kind: ArtifactKind, raw: &str) -> String {
    let mapper = ConventionMapper::new(&Config::default(), "");
    let model = ModelIdentifier::resolve(raw).expect("Failed to resolve model");
    mapper.render_artifact(kind, &model, &Templates::builtin())
}

#[test]
fn test_contract_for_plain_model() {
    let contract = render(ArtifactKind::Contract, "Invoice");

    insta::assert_snapshot!(contract.trim_end(), @r"
    <?php

    namespace App\Contracts;

    use Maarsson\Repository\Contracts\EloquentRepositoryContract;

    interface InvoiceRepositoryContract extends EloquentRepositoryContract
    {
        //
    }
    ");
}

#[test]
fn test_filter_for_nested_model() {
    let filter = render(ArtifactKind::Filter, "Accounting/Invoice");

    insta::assert_snapshot!(filter.trim_end(), @r"
    <?php

    namespace App\Filters\Accounting;

    use Maarsson\Repository\Filters\EloquentFilter;

    class InvoiceFilter extends EloquentFilter
    {
        //
    }
    ");
}

#[test]
fn test_updating_event_carries_model_and_attributes() {
    let event = render(ArtifactKind::Event(Stage::IsUpdating), "Accounting\\Invoice");

    assert!(event.contains("namespace App\\Events\\Accounting;"));
    assert!(event.contains("use App\\Models\\Accounting\\Invoice;"));
    assert!(event.contains("public Invoice $model;"));
    assert!(event.contains("public array $attributes;"));
}

#[test]
fn test_listener_imports_its_event() {
    let listener = render(ArtifactKind::Listener(Stage::WasDeleted), "Invoice");

    assert!(listener.contains("namespace App\\Listeners;"));
    assert!(listener.contains("use App\\Events\\InvoiceWasDeletedEvent;"));
}

#[test]
fn test_every_stub_is_fully_substituted() {
    for kind in ArtifactKind::all() {
        let rendered = render(kind, "Sales/Accounting/Invoice");
        assert!(!rendered.contains("{{"), "{:?} left a placeholder", kind);
    }
}

#[test]
fn test_filesystem_error_aborts_batch() {
    let config = Config::default();
    let mapper = ConventionMapper::new(&config, "");
    let model = ModelIdentifier::resolve("Invoice").unwrap();
    let store = MemoryFs::new();
    store.deny("app/Events");

    let aborted = Scaffold::repository()
        .run(&model, &mapper, &config, &Templates::builtin(), &store)
        .unwrap_err();

    assert!(aborted.error.is_fatal());
    assert_eq!(aborted.report.created().count(), 2);
    match aborted.error {
        Error::Filesystem { path, .. } => {
            assert_eq!(path, PathBuf::from("app/Events/InvoiceIsCreatingEvent.php"))
        }
        other => panic!("expected filesystem error, got {:?}", other),
    }
    // Contract and repository were written before the failure.
    assert_eq!(
        store.files(),
        vec![
            PathBuf::from("app/Contracts/InvoiceRepositoryContract.php"),
            PathBuf::from("app/Repositories/InvoiceRepository.php"),
        ]
    );
}
