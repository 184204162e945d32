//! Backend type descriptors.

use serde::{Deserialize, Serialize};

/// Backend name of the async result wrapper.
const ASYNC_NAME: &str = "Task";
/// Backend name of the nullable wrapper.
const NULLABLE_NAME: &str = "Nullable";

/// Description of a backend type.
///
/// Each variant carries exactly the capability the generator needs, so
/// resolution code can match exhaustively instead of probing type identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// A backend primitive, identified by its backend name (`Guid`, `Int32`, ...).
    Primitive { name: String },
    /// A fixed-size array of `element`.
    Array { element: Box<TypeDescriptor> },
    /// An async result wrapper. `None` is the wrapper of nothing.
    Async {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<TypeDescriptor>>,
    },
    /// A nullable wrapper around a value type.
    Nullable { inner: Box<TypeDescriptor> },
    /// A generic list-like collection (`List`1`, `IEnumerable`1`, ...).
    Collection {
        name: String,
        element: Box<TypeDescriptor>,
    },
    /// An enumeration.
    Enum { name: String },
    /// A reference to a complex type in [`crate::ApiDescriptionModel::types`].
    Complex { id: String },
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Async wrapper around `result`.
    pub fn task(result: TypeDescriptor) -> Self {
        Self::Async {
            result: Some(Box::new(result)),
        }
    }

    /// Async wrapper without payload.
    pub fn task_void() -> Self {
        Self::Async { result: None }
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        Self::Nullable {
            inner: Box::new(inner),
        }
    }

    /// `List`1` collection of `element`.
    pub fn list(element: TypeDescriptor) -> Self {
        Self::collection("List`1", element)
    }

    pub fn collection(name: impl Into<String>, element: TypeDescriptor) -> Self {
        Self::Collection {
            name: name.into(),
            element: Box::new(element),
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum { name: name.into() }
    }

    pub fn complex(id: impl Into<String>) -> Self {
        Self::Complex { id: id.into() }
    }

    /// Returns true for enumerations.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }

    /// Identity of the referenced complex type, if any.
    pub fn complex_id(&self) -> Option<&str> {
        match self {
            Self::Complex { id } => Some(id),
            _ => None,
        }
    }

    /// Backend name of the type.
    ///
    /// Complex types are named by their table entry, so the caller supplies
    /// the looked-up [`ComplexType`]. Arrays have no name of their own.
    pub fn backend_name<'a>(&'a self, complex: Option<&'a ComplexType>) -> Option<&'a str> {
        match self {
            Self::Primitive { name } | Self::Enum { name } | Self::Collection { name, .. } => {
                Some(name)
            }
            Self::Async { .. } => Some(ASYNC_NAME),
            Self::Nullable { .. } => Some(NULLABLE_NAME),
            Self::Complex { .. } => complex.map(|c| c.name.as_str()),
            Self::Array { .. } => None,
        }
    }

    /// Generic type arguments in declaration order.
    ///
    /// Wrappers and collections expose their payload as their single
    /// argument; complex types expose their closed arguments.
    pub fn generic_arguments<'a>(
        &'a self,
        complex: Option<&'a ComplexType>,
    ) -> Vec<&'a TypeDescriptor> {
        match self {
            Self::Async { result: Some(t) } => vec![t.as_ref()],
            Self::Nullable { inner } => vec![inner.as_ref()],
            Self::Collection { element, .. } => vec![element.as_ref()],
            Self::Complex { .. } => complex
                .map(|c| c.generic_arguments.iter().collect())
                .unwrap_or_default(),
            Self::Async { result: None }
            | Self::Primitive { .. }
            | Self::Array { .. }
            | Self::Enum { .. } => Vec::new(),
        }
    }
}

/// A declared property of a complex type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// A complex (class) type.
///
/// Generic types are described closed: `generic_arguments` holds the
/// concrete arguments and property types are already substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexType {
    /// Backend name, possibly carrying a generic arity marker (`PagedResultDto`1`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl ComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a closed generic argument.
    pub fn generic(mut self, argument: TypeDescriptor) -> Self {
        self.generic_arguments.push(argument);
        self
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.properties.push(PropertyDescriptor {
            name: name.into(),
            ty,
        });
        self
    }

    /// Name without the generic arity marker.
    pub fn base_name(&self) -> &str {
        strip_generic_arity(&self.name)
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }
}

/// Strip a generic arity marker (`Name`2` -> `Name`).
pub fn strip_generic_arity(name: &str) -> &str {
    match name.find('`') {
        Some(index) => &name[..index],
        None => name,
    }
}
