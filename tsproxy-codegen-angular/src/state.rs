//! State scoped to a single `create_script` call.

use std::collections::HashSet;

use indexmap::IndexSet;
use tsproxy_codegen::pipeline::Diagnostic;
use tsproxy_model::TypeDescriptor;

/// Identity of a type that gets a class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// An entry (or dangling reference) in the model's type table.
    Complex(String),
    /// A primitive name with no client mapping, emitted as an empty class.
    Opaque(String),
}

impl TypeKey {
    /// Descriptor that resolves back to this key.
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            TypeKey::Complex(id) => TypeDescriptor::complex(id),
            TypeKey::Opaque(name) => TypeDescriptor::primitive(name),
        }
    }
}

/// Dedup caches and pending registrations for one generation.
///
/// Created fresh for every generated script; never shared between calls.
#[derive(Debug, Default)]
pub struct GenerationState {
    emitted_types: HashSet<TypeKey>,
    emitted_class_names: HashSet<String>,
    pending: IndexSet<TypeKey>,
    warned: HashSet<TypeKey>,
    warnings: Vec<Diagnostic>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once emission of `key` has started.
    pub fn is_emitted(&self, key: &TypeKey) -> bool {
        self.emitted_types.contains(key)
    }

    /// Mark `key` as emitted. Returns false if it already was.
    pub fn mark_emitted(&mut self, key: TypeKey) -> bool {
        self.pending.shift_remove(&key);
        self.emitted_types.insert(key)
    }

    pub fn has_class_name(&self, name: &str) -> bool {
        self.emitted_class_names.contains(name)
    }

    /// Claim a class name. Returns false if a class with this name exists.
    pub fn claim_class_name(&mut self, name: impl Into<String>) -> bool {
        self.emitted_class_names.insert(name.into())
    }

    /// Register a type that needs a class. Known types are ignored.
    pub fn register(&mut self, key: TypeKey) -> bool {
        if self.emitted_types.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    pub fn is_pending(&self, key: &TypeKey) -> bool {
        self.pending.contains(key)
    }

    /// Take every registration made since the last call, in order.
    pub fn take_pending(&mut self) -> Vec<TypeKey> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Record an unresolved-type warning, once per key.
    pub fn warn_unresolved(&mut self, key: &TypeKey, message: impl Into<String>) {
        if self.warned.insert(key.clone()) {
            let message = message.into();
            tracing::warn!("{message}");
            self.warnings.push(Diagnostic::warning("generate", message));
        }
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Diagnostic> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_skips_emitted() {
        let mut state = GenerationState::new();
        let key = TypeKey::Complex("Order".into());

        assert!(state.register(key.clone()));
        assert!(!state.register(key.clone()));
        assert!(state.mark_emitted(key.clone()));
        assert!(!state.is_pending(&key));
        assert!(!state.register(key.clone()));
        assert!(!state.mark_emitted(key));
    }

    #[test]
    fn test_take_pending_preserves_order() {
        let mut state = GenerationState::new();
        state.register(TypeKey::Complex("B".into()));
        state.register(TypeKey::Complex("A".into()));

        assert_eq!(
            state.take_pending(),
            vec![TypeKey::Complex("B".into()), TypeKey::Complex("A".into())]
        );
        assert!(state.take_pending().is_empty());
    }

    #[test]
    fn test_claim_class_name() {
        let mut state = GenerationState::new();
        assert!(state.claim_class_name("OrderDto"));
        assert!(state.has_class_name("OrderDto"));
        assert!(!state.claim_class_name("OrderDto"));
    }

    #[test]
    fn test_warn_once_per_key() {
        let mut state = GenerationState::new();
        let key = TypeKey::Opaque("JToken".into());
        state.warn_unresolved(&key, "unresolved type 'JToken'");
        state.warn_unresolved(&key, "unresolved type 'JToken'");
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(state.into_warnings()[0].message, "unresolved type 'JToken'");
    }

    #[test]
    fn test_key_descriptor() {
        assert_eq!(
            TypeKey::Complex("Acme.Order".into()).descriptor(),
            TypeDescriptor::complex("Acme.Order")
        );
        assert_eq!(
            TypeKey::Opaque("JToken".into()).descriptor(),
            TypeDescriptor::primitive("JToken")
        );
    }
}
