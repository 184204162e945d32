//! Angular proxy script generator.

use eyre::Result;
use indexmap::IndexMap;
use tsproxy_codegen::{
    GenerateError,
    generation::{ImportCollector, ProxyScriptGenerator},
    pipeline::Diagnostic,
    schema::signature_types,
};
use tsproxy_config::{AngularConfig, PromiseStyle, ProxyConfig};
use tsproxy_model::ApiDescriptionModel;

use crate::{
    NAME,
    ast::{ControllerDecl, NamespaceDecl, NamespaceItem},
    calls::CallEmitter,
    classes::ClassEmitter,
    code_file::CodeFile,
    naming::normalize,
    state::GenerationState,
    type_mapper::TypeNameResolver,
    url::UrlBuilder,
};

/// Output of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedScript {
    pub code: String,
    /// Unresolved types and other recoverable problems.
    pub warnings: Vec<Diagnostic>,
}

/// Generates an Angular client with one namespace per module, a model class
/// per reachable complex type and an injectable service per controller.
///
/// The generator is immutable; every call starts from fresh state.
#[derive(Debug, Clone)]
pub struct Generator {
    config: AngularConfig,
    type_overrides: IndexMap<String, String>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&ProxyConfig::default())
    }
}

impl Generator {
    pub fn new(config: AngularConfig) -> Self {
        Self {
            config,
            type_overrides: ProxyConfig::default().type_overrides(),
        }
    }

    /// Generator configured from the `[angular]` and `[type_overrides]`
    /// sections.
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self {
            config: config.angular.clone(),
            type_overrides: config.type_overrides(),
        }
    }

    /// Replace the field type overrides.
    pub fn with_type_overrides(mut self, overrides: IndexMap<String, String>) -> Self {
        self.type_overrides = overrides;
        self
    }

    pub fn config(&self) -> &AngularConfig {
        &self.config
    }

    /// Generate the script together with its warnings.
    pub fn generate(&self, model: &ApiDescriptionModel) -> Result<GeneratedScript> {
        let mut state = GenerationState::new();
        let namespaces = self.declarations(model, &mut state)?;

        let code = CodeFile::new()
            .header(&self.config.header)
            .imports(&self.imports())
            .add_all(&namespaces)
            .render();

        Ok(GeneratedScript {
            code,
            warnings: state.into_warnings(),
        })
    }

    /// Decide what to emit: one namespace per module in supplied order.
    ///
    /// Within a namespace each controller is preceded by the classes its
    /// actions reach that were not emitted earlier in this generation.
    pub fn declarations(
        &self,
        model: &ApiDescriptionModel,
        state: &mut GenerationState,
    ) -> Result<Vec<NamespaceDecl>, GenerateError> {
        let resolver = TypeNameResolver::new(model);
        let urls = UrlBuilder::from_config(&self.config);
        let classes = ClassEmitter::new(resolver, &self.type_overrides);
        let calls = CallEmitter::new(resolver, &urls)
            .with_promise_style(self.config.promise_style)
            .with_locale(self.config.locale);

        let mut namespaces = Vec::with_capacity(model.modules.len());
        for module in model.modules.values() {
            tracing::debug!(module = %module.name, "generating module");
            let mut namespace = NamespaceDecl::new(normalize(&module.name, "."));

            for controller in module.controllers.values() {
                tracing::debug!(controller = %controller.name, actions = controller.actions.len(), "generating controller");

                let mut declared = Vec::new();
                for action in controller.actions.values() {
                    for ty in signature_types(action) {
                        classes.emit(ty, state, &mut declared);
                    }
                }

                let mut service = ControllerDecl::new(normalize(&controller.name, ""));
                for action in controller.actions.values() {
                    service = service.method(calls.emit_action(controller, action, state)?);
                }
                classes.emit_pending(state, &mut declared);

                namespace
                    .items
                    .extend(declared.into_iter().map(NamespaceItem::Class));
                namespace.items.push(NamespaceItem::Controller(service));
            }

            namespaces.push(namespace);
        }

        Ok(namespaces)
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        imports.add("@angular/core", "Injectable");
        imports.add(&self.config.http_client_import, "HttpClient");
        if self.config.promise_style == PromiseStyle::FirstValueFrom {
            imports.add("rxjs", "firstValueFrom");
        }
        imports
    }
}

impl ProxyScriptGenerator for Generator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn create_script(&self, model: &ApiDescriptionModel) -> Result<String> {
        let script = self.generate(model)?;
        Ok(script.code)
    }
}
