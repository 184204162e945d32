//! Built-in lints for model validation.

mod dangling_type_ref;
mod empty_controller;
mod single_body;
mod url_placeholder;

pub use dangling_type_ref::DanglingTypeRefLint;
pub use empty_controller::EmptyControllerLint;
pub use single_body::SingleBodyLint;
pub use url_placeholder::UrlPlaceholderLint;

use tsproxy_model::{ActionDescriptor, ControllerDescriptor, ModuleDescriptor};

/// Dotted location of an action, e.g. `Sales.Orders.GetOrder`.
fn action_location(
    module: &ModuleDescriptor,
    controller: &ControllerDescriptor,
    action: &ActionDescriptor,
) -> String {
    format!("{}.{}.{}", module.name, controller.name, action.name)
}
