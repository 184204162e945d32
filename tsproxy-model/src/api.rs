//! Module, controller, action and parameter descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ComplexType, TypeDescriptor};

/// The complete API description supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDescriptionModel {
    /// Modules keyed by name, in supplied order.
    #[serde(default)]
    pub modules: IndexMap<String, ModuleDescriptor>,
    /// Complex types keyed by identity.
    #[serde(default)]
    pub types: IndexMap<String, ComplexType>,
}

impl ApiDescriptionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, keyed by its name.
    pub fn module(mut self, module: ModuleDescriptor) -> Self {
        self.modules.insert(module.name.clone(), module);
        self
    }

    /// Add a complex type under the given identity.
    pub fn complex_type(mut self, id: impl Into<String>, ty: ComplexType) -> Self {
        self.types.insert(id.into(), ty);
        self
    }

    /// Look up a complex type by identity.
    pub fn complex(&self, id: &str) -> Option<&ComplexType> {
        self.types.get(id)
    }

    /// Complex type referenced by a descriptor, if it is a resolvable reference.
    pub fn complex_of(&self, ty: &TypeDescriptor) -> Option<&ComplexType> {
        ty.complex_id().and_then(|id| self.complex(id))
    }

    /// Iterate over every controller with its owning module.
    pub fn controllers(&self) -> impl Iterator<Item = (&ModuleDescriptor, &ControllerDescriptor)> {
        self.modules
            .values()
            .flat_map(|m| m.controllers.values().map(move |c| (m, c)))
    }

    /// Iterate over every action with its owning module and controller.
    pub fn actions(
        &self,
    ) -> impl Iterator<Item = (&ModuleDescriptor, &ControllerDescriptor, &ActionDescriptor)> {
        self.controllers()
            .flat_map(|(m, c)| c.actions.values().map(move |a| (m, c, a)))
    }

    pub fn controller_count(&self) -> usize {
        self.controllers().count()
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// A backend module grouping controllers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    #[serde(default)]
    pub controllers: IndexMap<String, ControllerDescriptor>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controllers: IndexMap::new(),
        }
    }

    /// Add a controller, keyed by its name.
    pub fn controller(mut self, controller: ControllerDescriptor) -> Self {
        self.controllers.insert(controller.name.clone(), controller);
        self
    }
}

/// A backend controller exposing actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerDescriptor {
    pub name: String,
    #[serde(default)]
    pub actions: IndexMap<String, ActionDescriptor>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: IndexMap::new(),
        }
    }

    /// Add an action, keyed by its name.
    pub fn action(mut self, action: ActionDescriptor) -> Self {
        self.actions.insert(action.name.clone(), action);
        self
    }
}

/// One backend endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub name: String,
    /// URL template, possibly containing `{param}` placeholders.
    pub url: String,
    /// Explicit HTTP verb. `None` means infer from the action name.
    #[serde(default)]
    pub http_method: Option<String>,
    /// Return type. `None` is treated as no payload.
    #[serde(default)]
    pub return_type: Option<TypeDescriptor>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the explicit HTTP verb.
    pub fn method(mut self, verb: impl Into<String>) -> Self {
        self.http_method = Some(verb.into());
        self
    }

    pub fn returns(mut self, ty: TypeDescriptor) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parameters bound from the given source, in declaration order.
    pub fn parameters_from(
        &self,
        source: BindingSource,
    ) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters
            .iter()
            .filter(move |p| p.binding_source == source)
    }
}

/// How a parameter's value travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingSource {
    #[serde(alias = "Path")]
    Path,
    #[serde(alias = "Query")]
    Query,
    #[serde(alias = "Body")]
    Body,
    #[serde(alias = "Form")]
    Form,
    #[serde(alias = "Header")]
    Header,
    #[serde(alias = "ModelBinding")]
    ModelBinding,
}

impl BindingSource {
    /// Returns true for sources carried in the query string.
    pub fn is_query_string(&self) -> bool {
        matches!(self, BindingSource::Query | BindingSource::ModelBinding)
    }
}

/// A parameter of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Name as seen on the wire.
    pub name: String,
    /// Name in the backend method signature. Differs from `name` when the
    /// parameter is a flattened member of a complex argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_on_method: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub binding_source: BindingSource,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor, binding_source: BindingSource) -> Self {
        Self {
            name: name.into(),
            name_on_method: None,
            ty,
            binding_source,
        }
    }

    /// Mark this parameter as a member of the method argument `name`.
    pub fn on_method(mut self, name: impl Into<String>) -> Self {
        self.name_on_method = Some(name.into());
        self
    }

    /// Name in the backend method signature, defaulting to the wire name.
    pub fn name_on_method(&self) -> &str {
        self.name_on_method.as_deref().unwrap_or(&self.name)
    }

    /// Returns true when the wire name differs from the method argument name.
    pub fn is_member(&self) -> bool {
        self.name_on_method() != self.name
    }
}
