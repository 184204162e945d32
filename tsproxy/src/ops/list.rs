//! List operation - describe the modules of an API description.

use tsproxy_codegen_angular::calls::{HttpVerb, action_verb};
use tsproxy_model::ApiDescriptionModel;

use crate::reports::{ActionEntry, ControllerEntry, ListReport, ModuleEntry};

/// Execute the list operation.
pub fn list(model: &ApiDescriptionModel) -> ListReport {
    let modules = model
        .modules
        .values()
        .map(|module| ModuleEntry {
            name: module.name.clone(),
            controllers: module
                .controllers
                .values()
                .map(|controller| ControllerEntry {
                    name: controller.name.clone(),
                    actions: controller
                        .actions
                        .values()
                        .map(|action| ActionEntry {
                            name: action.name.clone(),
                            verb: action_verb(action).to_string(),
                            inferred: action
                                .http_method
                                .as_deref()
                                .and_then(HttpVerb::parse)
                                .is_none(),
                            url: action.url.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ListReport { modules }
}
