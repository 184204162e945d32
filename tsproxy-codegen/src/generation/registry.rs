//! Registry of proxy script generators keyed by name.
//!
//! A host looks generators up by the symbolic name they register under and
//! invokes [`ProxyScriptGenerator::create_script`] on them.
//!
//! ```ignore
//! let mut registry = GeneratorRegistry::new();
//! tsproxy_codegen_angular::register(&mut registry, &config);
//!
//! let script = registry.get("angular")?.create_script(&model)?;
//! ```

use eyre::Result;
use indexmap::IndexMap;
use tsproxy_model::ApiDescriptionModel;

use crate::GenerateError;

/// A generator that turns an API description into a single client script.
///
/// Implementations hold no per-call state, so one instance may serve
/// concurrent calls for independent models.
pub trait ProxyScriptGenerator: Send + Sync {
    /// Fixed symbolic name used as the registry key.
    fn name(&self) -> &'static str;

    /// Generate the client script for `model`.
    fn create_script(&self, model: &ApiDescriptionModel) -> Result<String>;
}

/// Generators keyed by name, in registration order.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: IndexMap<&'static str, Box<dyn ProxyScriptGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any previous one with the same name.
    pub fn register(&mut self, generator: Box<dyn ProxyScriptGenerator>) {
        let name = generator.name();
        if self.generators.insert(name, generator).is_some() {
            tracing::debug!(generator = name, "replaced registered generator");
        }
    }

    /// Look up a generator by name.
    pub fn get(&self, name: &str) -> Result<&dyn ProxyScriptGenerator> {
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| {
                GenerateError::UnknownGenerator {
                    name: name.to_string(),
                    available: self.names().map(str::to_string).collect(),
                }
                .into()
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static str);

    impl ProxyScriptGenerator for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn create_script(&self, _model: &ApiDescriptionModel) -> Result<String> {
            Ok(self.1.to_string())
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(Fixed("angular", "// angular")));

        assert!(registry.contains("angular"));
        let script = registry
            .get("angular")
            .unwrap()
            .create_script(&ApiDescriptionModel::new())
            .unwrap();
        assert_eq!(script, "// angular");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(Fixed("angular", "first")));
        registry.register(Box::new(Fixed("angular", "second")));

        assert_eq!(registry.len(), 1);
        let script = registry
            .get("angular")
            .unwrap()
            .create_script(&ApiDescriptionModel::new())
            .unwrap();
        assert_eq!(script, "second");
    }

    #[test]
    fn test_unknown_generator() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(Fixed("angular", "")));
        registry.register(Box::new(Fixed("jquery", "")));

        let err = registry.get("react").err().unwrap();
        match err.downcast_ref::<GenerateError>() {
            Some(GenerateError::UnknownGenerator { name, available }) => {
                assert_eq!(name, "react");
                assert_eq!(available, &["angular", "jquery"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_names_in_registration_order() {
        let mut registry = GeneratorRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(Fixed("b", "")));
        registry.register(Box::new(Fixed("a", "")));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["b", "a"]);
    }
}
