//! Computed data from model analysis.

use tsproxy_model::ApiDescriptionModel;

use super::reachable_types;

/// Pre-computed analysis of an API description.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComputedData {
    pub module_count: usize,
    pub controller_count: usize,
    pub action_count: usize,
    /// Complex type ids reachable from action signatures, in order of first reference.
    pub reachable_types: Vec<String>,
}

impl ComputedData {
    pub fn from_model(model: &ApiDescriptionModel) -> Self {
        Self {
            module_count: model.modules.len(),
            controller_count: model.controller_count(),
            action_count: model.action_count(),
            reachable_types: reachable_types(model),
        }
    }

    /// Number of complex types declared but never referenced by an action.
    pub fn unreachable_count(&self, model: &ApiDescriptionModel) -> usize {
        model
            .types
            .keys()
            .filter(|id| !self.reachable_types.contains(id))
            .count()
    }
}
