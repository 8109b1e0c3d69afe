//! Repository bindings and the event listener map of registered models.

use std::path::PathBuf;

use indexmap::IndexMap;
use repokit_config::Config;
use repokit_core::{File, FileStore};
use serde::Serialize;

use crate::{
    ArtifactKind, ConventionMapper, Diagnostic, DiagnosticKind, Error, ModelIdentifier,
    Placeholders, Result, Stage, Templates, convention::PROVIDER_NAME,
};

/// Contract to repository binding of one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub model: String,
    pub contract: String,
    pub repository: String,
}

/// Event and listener classes of one lifecycle stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListener {
    pub stage: Stage,
    pub event: String,
    pub listener: String,
}

/// Event and listener classes of a model, one entry per stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListenerSet {
    model: String,
    entries: Vec<EventListener>,
}

impl EventListenerSet {
    pub fn new(model: impl Into<String>, entries: Vec<EventListener>) -> Self {
        Self {
            model: model.into(),
            entries,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn entries(&self) -> &[EventListener] {
        &self.entries
    }
}

/// Whether a binding makes it into the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BindingState {
    Active,
    /// At least one of the model, contract or repository files is missing.
    Skipped { missing: Vec<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedBinding {
    #[serde(flatten)]
    pub binding: Binding,
    #[serde(flatten)]
    pub state: BindingState,
}

impl PlannedBinding {
    pub fn is_active(&self) -> bool {
        matches!(self.state, BindingState::Active)
    }
}

/// Bindings and event map for every registered model, in config order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Wiring {
    pub bindings: Vec<PlannedBinding>,
    /// Event class to listener classes.
    pub listen: IndexMap<String, Vec<String>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Wiring {
    /// Plan the wiring of every registered model.
    ///
    /// Fails only when a registered model name does not resolve.
    pub fn plan(
        mapper: &ConventionMapper,
        config: &Config,
        store: &dyn FileStore,
    ) -> Result<Self> {
        let mut wiring = Self::default();

        for raw in &config.models {
            let model = ModelIdentifier::resolve(raw)?;
            wiring.add_binding(mapper, &model, store);

            for entry in mapper.event_listener_set(&model).entries() {
                let listeners = wiring.listen.entry(entry.event.clone()).or_default();
                if !listeners.contains(&entry.listener) {
                    listeners.push(entry.listener.clone());
                }
            }
        }

        Ok(wiring)
    }

    fn add_binding(
        &mut self,
        mapper: &ConventionMapper,
        model: &ModelIdentifier,
        store: &dyn FileStore,
    ) {
        let required = [
            mapper.model_file(model),
            mapper.resolve_artifact(ArtifactKind::Contract, model).file,
            mapper.resolve_artifact(ArtifactKind::Repository, model).file,
        ];
        let missing: Vec<PathBuf> = required
            .into_iter()
            .filter(|path| !store.exists(path))
            .collect();

        let binding = mapper.binding(model);
        let state = if missing.is_empty() {
            BindingState::Active
        } else {
            let files = missing
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            self.diagnostics.push(Diagnostic::warning(
                DiagnosticKind::BindingSkipped,
                format!("binding for `{}` skipped, missing {}", binding.model, files),
            ));
            BindingState::Skipped { missing }
        };

        self.bindings.push(PlannedBinding { binding, state });
    }

    pub fn active_bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings
            .iter()
            .filter(|b| b.is_active())
            .map(|b| &b.binding)
    }

    /// Render the service provider stub.
    pub fn render_provider(&self, mapper: &ConventionMapper, templates: &Templates) -> String {
        let bindings = self
            .active_bindings()
            .map(|b| format!("        \\{}::class => \\{}::class,", b.contract, b.repository))
            .collect::<Vec<_>>()
            .join("\n");

        let listen = self
            .listen
            .iter()
            .map(|(event, listeners)| {
                let mut entry = format!("        \\{}::class => [\n", event);
                for listener in listeners {
                    entry.push_str(&format!("            \\{}::class,\n", listener));
                }
                entry.push_str("        ],");
                entry
            })
            .collect::<Vec<_>>()
            .join("\n");

        Placeholders::new()
            .set("providerNamespace", mapper.provider_namespace())
            .set("providerName", PROVIDER_NAME)
            .set("bindings", bindings)
            .set("listen", listen)
            .render(templates.provider())
    }

    /// Write the service provider, replacing any previous version.
    pub fn write_provider(
        &self,
        mapper: &ConventionMapper,
        templates: &Templates,
        store: &dyn FileStore,
    ) -> Result<PathBuf> {
        let path = mapper.provider_file();
        File::new(&path, self.render_provider(mapper, templates))
            .write(store)
            .map_err(|e| Error::filesystem(&path, e))?;
        Ok(path)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
