//! Backend type to TypeScript type name resolution.

use tsproxy_model::{ApiDescriptionModel, TypeDescriptor, strip_generic_arity};

use crate::{
    naming::normalize,
    state::{GenerationState, TypeKey},
};

/// Backend primitive names (lower-cased) and their TypeScript spelling.
const PRIMITIVES: &[(&str, &str)] = &[
    ("guid", "string"),
    ("string", "string"),
    ("char", "string"),
    ("datetime", "Date"),
    ("datetimeoffset", "Date"),
    ("byte", "number"),
    ("sbyte", "number"),
    ("int16", "number"),
    ("int32", "number"),
    ("int64", "number"),
    ("uint16", "number"),
    ("uint32", "number"),
    ("uint64", "number"),
    ("single", "number"),
    ("float", "number"),
    ("double", "number"),
    ("decimal", "number"),
    ("bool", "boolean"),
    ("boolean", "boolean"),
    ("void", "void"),
];

/// Backend names that are typed as `any` and never get a class.
const IGNORED: &[&str] = &["exception", "aggregateexception", "module", "object"];

/// TypeScript spelling of a backend primitive, if it has one.
pub fn primitive_name(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    PRIMITIVES
        .iter()
        .find(|(backend, _)| *backend == lower)
        .map(|(_, ts)| *ts)
}

fn is_ignored_name(name: &str) -> bool {
    let lower = normalize(strip_generic_arity(name), "").to_ascii_lowercase();
    IGNORED.contains(&lower.as_str())
}

/// Name for a complex reference missing from the type table: the last
/// dotted segment of its id.
fn dangling_name(id: &str) -> &str {
    strip_generic_arity(id.rsplit('.').next().unwrap_or(id))
}

/// Maps type descriptors to TypeScript type names and registers the
/// complex types that need a class declaration.
#[derive(Debug, Clone, Copy)]
pub struct TypeNameResolver<'a> {
    model: &'a ApiDescriptionModel,
}

impl<'a> TypeNameResolver<'a> {
    pub fn new(model: &'a ApiDescriptionModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a ApiDescriptionModel {
        self.model
    }

    /// Returns true for exception/object/module markers typed as `any`.
    pub fn is_ignorable(&self, ty: &TypeDescriptor) -> bool {
        match ty {
            TypeDescriptor::Primitive { name } => is_ignored_name(name),
            TypeDescriptor::Complex { id } => self
                .model
                .complex(id)
                .is_some_and(|c| is_ignored_name(&c.name)),
            _ => false,
        }
    }

    /// Returns true for primitives with a TypeScript mapping.
    pub fn is_basic(&self, ty: &TypeDescriptor) -> bool {
        matches!(ty, TypeDescriptor::Primitive { name } if primitive_name(name).is_some())
    }

    /// Key of the class declared for `ty` itself, without unwrapping.
    pub fn class_key(&self, ty: &TypeDescriptor) -> Option<TypeKey> {
        if self.is_ignorable(ty) {
            return None;
        }
        match ty {
            TypeDescriptor::Primitive { name } if primitive_name(name).is_none() => {
                Some(TypeKey::Opaque(name.clone()))
            }
            TypeDescriptor::Complex { id } => Some(TypeKey::Complex(id.clone())),
            _ => None,
        }
    }

    /// Resolve the TypeScript type name of `ty`.
    ///
    /// Complex types met along the way are registered in `state` unless
    /// their emission already started. The result depends only on `ty` and
    /// the model, so repeated calls agree.
    pub fn resolve(&self, ty: &TypeDescriptor, state: &mut GenerationState) -> String {
        if self.is_ignorable(ty) {
            return "any".to_string();
        }

        match ty {
            TypeDescriptor::Async { result: None } => "void".to_string(),
            TypeDescriptor::Array { element } => format!("{}[]", self.resolve(element, state)),
            TypeDescriptor::Async {
                result: Some(inner),
            }
            | TypeDescriptor::Nullable { inner } => self.resolve(inner, state),
            TypeDescriptor::Collection { element, .. } => {
                format!("{}[]", self.resolve(element, state))
            }
            TypeDescriptor::Enum { .. } => "number".to_string(),
            TypeDescriptor::Primitive { name } => match primitive_name(name) {
                Some(ts) => ts.to_string(),
                None => self.resolve_class(TypeKey::Opaque(name.clone()), ty, state),
            },
            TypeDescriptor::Complex { id } => {
                self.resolve_class(TypeKey::Complex(id.clone()), ty, state)
            }
        }
    }

    fn resolve_class(&self, key: TypeKey, ty: &TypeDescriptor, state: &mut GenerationState) -> String {
        match &key {
            TypeKey::Opaque(name) => state.warn_unresolved(
                &key,
                format!("unresolved type '{name}' is emitted as an empty class"),
            ),
            TypeKey::Complex(id) if self.model.complex(id).is_none() => state.warn_unresolved(
                &key,
                format!("unresolved type reference '{id}' is emitted as an empty class"),
            ),
            TypeKey::Complex(_) => {}
        }
        state.register(key);
        self.class_name(ty)
    }

    /// Canonical class name: base name plus `Of` and the `And`-joined
    /// names of non-primitive generic arguments.
    pub fn class_name(&self, ty: &TypeDescriptor) -> String {
        normalize(&self.specialized_name(ty, &mut Vec::new()), "")
    }

    fn specialized_name(&self, ty: &TypeDescriptor, visiting: &mut Vec<String>) -> String {
        // an array argument is named after its element
        if let TypeDescriptor::Array { element } = ty {
            return self.specialized_name(element, visiting);
        }

        let complex = self.model.complex_of(ty);
        let base = match (ty.backend_name(complex), ty.complex_id()) {
            (Some(name), _) => strip_generic_arity(name),
            (None, Some(id)) => dangling_name(id),
            (None, None) => "",
        };

        let id = ty.complex_id();
        if let Some(id) = id {
            // a type cannot be its own generic argument
            if visiting.iter().any(|v| v == id) {
                return base.to_string();
            }
            visiting.push(id.to_string());
        }

        let arguments: Vec<String> = ty
            .generic_arguments(complex)
            .into_iter()
            .filter(|a| !self.is_basic(a) && !self.is_ignorable(a))
            .map(|a| self.specialized_name(a, visiting))
            .collect();

        if id.is_some() {
            visiting.pop();
        }

        if arguments.is_empty() {
            base.to_string()
        } else {
            format!("{base}Of{}", arguments.join("And"))
        }
    }
}
