//! Model class emission.

use indexmap::IndexMap;
use tsproxy_model::TypeDescriptor;

use crate::{
    ast::{ClassDecl, FieldDecl},
    naming::member_name,
    state::{GenerationState, TypeKey},
    type_mapper::TypeNameResolver,
};

/// Placeholder in an override replacement for the declaring class name.
const SELF_PLACEHOLDER: &str = "{self}";

/// Collects one [`ClassDecl`] per distinct complex type, children first.
#[derive(Debug, Clone, Copy)]
pub struct ClassEmitter<'a> {
    resolver: TypeNameResolver<'a>,
    overrides: &'a IndexMap<String, String>,
}

impl<'a> ClassEmitter<'a> {
    /// `overrides` maps a resolved field type name to its replacement.
    pub fn new(resolver: TypeNameResolver<'a>, overrides: &'a IndexMap<String, String>) -> Self {
        Self { resolver, overrides }
    }

    /// Emit classes for every complex type reachable from `ty`.
    ///
    /// Wrappers, arrays and collections are looked through. Types whose
    /// emission already started, and types whose canonical name is already
    /// taken, produce nothing.
    pub fn emit(&self, ty: &TypeDescriptor, state: &mut GenerationState, out: &mut Vec<ClassDecl>) {
        match ty {
            TypeDescriptor::Array { element } | TypeDescriptor::Collection { element, .. } => {
                self.emit(element, state, out)
            }
            TypeDescriptor::Nullable { inner }
            | TypeDescriptor::Async {
                result: Some(inner),
            } => self.emit(inner, state, out),
            TypeDescriptor::Async { result: None } | TypeDescriptor::Enum { .. } => {}
            TypeDescriptor::Primitive { .. } | TypeDescriptor::Complex { .. } => {
                if let Some(key) = self.resolver.class_key(ty) {
                    self.emit_key(key, ty, state, out);
                }
            }
        }
    }

    /// Emit classes for registered types that have none yet.
    pub fn emit_pending(&self, state: &mut GenerationState, out: &mut Vec<ClassDecl>) {
        loop {
            let pending = state.take_pending();
            if pending.is_empty() {
                break;
            }
            for key in pending {
                if !state.is_emitted(&key) {
                    let ty = key.descriptor();
                    self.emit_key(key, &ty, state, out);
                }
            }
        }
    }

    fn emit_key(
        &self,
        key: TypeKey,
        ty: &TypeDescriptor,
        state: &mut GenerationState,
        out: &mut Vec<ClassDecl>,
    ) {
        if !state.mark_emitted(key) {
            return;
        }

        let name = self.resolver.resolve(ty, state);
        if !state.claim_class_name(name.clone()) {
            tracing::debug!(class = %name, "class name already emitted");
            return;
        }

        let mut class = ClassDecl::new(name);
        if let Some(complex) = self.resolver.model().complex_of(ty) {
            for argument in &complex.generic_arguments {
                self.emit(argument, state, out);
            }
            let mut overridden = Vec::with_capacity(complex.properties.len());
            for property in &complex.properties {
                // resolve on scratch state so overridden types stay unregistered
                let display = self.resolver.resolve(&property.ty, &mut GenerationState::new());
                let is_overridden = self.overrides.contains_key(&display);
                if is_overridden {
                    let first = self
                        .resolver
                        .model()
                        .complex_of(&property.ty)
                        .and_then(|c| c.generic_arguments.first());
                    if let Some(argument) = first {
                        self.emit(argument, state, out);
                    }
                } else {
                    self.emit(&property.ty, state, out);
                }
                overridden.push(is_overridden);
            }
            for (property, is_overridden) in complex.properties.iter().zip(overridden) {
                let display = if is_overridden {
                    self.resolver.resolve(&property.ty, &mut GenerationState::new())
                } else {
                    self.resolver.resolve(&property.ty, state)
                };
                let ty = self.apply_override(display, &class.name);
                class = class.field(FieldDecl::new(member_name(&property.name), ty));
            }
        }

        tracing::debug!(class = %class.name, fields = class.fields.len(), "emitted class");
        out.push(class);
    }

    fn apply_override(&self, display: String, class_name: &str) -> String {
        match self.overrides.get(&display) {
            Some(replacement) => replacement.replace(SELF_PLACEHOLDER, class_name),
            None => display,
        }
    }
}
