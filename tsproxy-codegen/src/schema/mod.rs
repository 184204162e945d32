//! Model traversal and pre-computed analysis.
//!
//! - [`ComputedData`] - Counts and reachable types shared by phases and generators
//! - [`visit_complex_refs`] - Walk the complex references inside a descriptor
//! - [`reachable_types`] - Complex types reachable from action signatures

mod computed;

use indexmap::IndexSet;
use tsproxy_model::{ActionDescriptor, ApiDescriptionModel, TypeDescriptor};

pub use computed::ComputedData;

/// Call `f` with the id of every complex reference nested in `ty`.
///
/// Only the descriptor itself is walked; complex types are not looked up.
pub fn visit_complex_refs<'a>(ty: &'a TypeDescriptor, f: &mut impl FnMut(&'a str)) {
    match ty {
        TypeDescriptor::Complex { id } => f(id),
        TypeDescriptor::Array { element } | TypeDescriptor::Collection { element, .. } => {
            visit_complex_refs(element, f)
        }
        TypeDescriptor::Nullable { inner } => visit_complex_refs(inner, f),
        TypeDescriptor::Async { result: Some(result) } => visit_complex_refs(result, f),
        TypeDescriptor::Async { result: None }
        | TypeDescriptor::Primitive { .. }
        | TypeDescriptor::Enum { .. } => {}
    }
}

/// Types appearing in an action signature: parameters, then the return type.
pub fn signature_types(action: &ActionDescriptor) -> impl Iterator<Item = &TypeDescriptor> {
    action
        .parameters
        .iter()
        .map(|p| &p.ty)
        .chain(action.return_type.as_ref())
}

/// Complex type ids reachable from any action signature, in order of first
/// reference. Ids without an entry in the type table are included but not
/// followed.
pub fn reachable_types(model: &ApiDescriptionModel) -> Vec<String> {
    let mut seen = IndexSet::new();
    for (_, _, action) in model.actions() {
        for ty in signature_types(action) {
            collect(model, ty, &mut seen);
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

fn collect<'a>(model: &'a ApiDescriptionModel, ty: &'a TypeDescriptor, seen: &mut IndexSet<&'a str>) {
    let mut ids = Vec::new();
    visit_complex_refs(ty, &mut |id| ids.push(id));

    for id in ids {
        if !seen.insert(id) {
            continue;
        }
        if let Some(complex) = model.complex(id) {
            for argument in &complex.generic_arguments {
                collect(model, argument, seen);
            }
            for property in &complex.properties {
                collect(model, &property.ty, seen);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tsproxy_model::{BindingSource, ComplexType, ControllerDescriptor, ModuleDescriptor, ParameterDescriptor};

    use super::*;

    fn model() -> ApiDescriptionModel {
        ApiDescriptionModel::new()
            .module(
                ModuleDescriptor::new("Sales").controller(
                    ControllerDescriptor::new("Orders")
                        .action(
                            ActionDescriptor::new("GetOrders", "orders")
                                .returns(TypeDescriptor::task(TypeDescriptor::complex("Paged[Order]"))),
                        )
                        .action(
                            ActionDescriptor::new("CreateOrder", "orders").param(ParameterDescriptor::new(
                                "input",
                                TypeDescriptor::complex("CreateOrderInput"),
                                BindingSource::Body,
                            )),
                        ),
                ),
            )
            .complex_type(
                "Paged[Order]",
                ComplexType::new("PagedResultDto`1")
                    .generic(TypeDescriptor::complex("Order"))
                    .property("Items", TypeDescriptor::list(TypeDescriptor::complex("Order"))),
            )
            .complex_type(
                "Order",
                ComplexType::new("OrderDto")
                    .property("Lines", TypeDescriptor::array(TypeDescriptor::complex("OrderLine")))
                    .property("Parent", TypeDescriptor::nullable(TypeDescriptor::complex("Order"))),
            )
            .complex_type("OrderLine", ComplexType::new("OrderLineDto"))
            .complex_type("Unused", ComplexType::new("UnusedDto"))
    }

    #[test]
    fn test_visit_complex_refs_unwraps() {
        let ty = TypeDescriptor::task(TypeDescriptor::nullable(TypeDescriptor::list(
            TypeDescriptor::complex("A"),
        )));
        let mut ids = Vec::new();
        visit_complex_refs(&ty, &mut |id| ids.push(id));
        assert_eq!(ids, ["A"]);
    }

    #[test]
    fn test_reachable_types_in_first_reference_order() {
        let reachable = reachable_types(&model());
        assert_eq!(
            reachable,
            ["Paged[Order]", "Order", "OrderLine", "CreateOrderInput"]
        );
    }

    #[test]
    fn test_signature_types_includes_return() {
        let action = ActionDescriptor::new("GetOrder", "orders/{id}")
            .param(ParameterDescriptor::new("id", TypeDescriptor::primitive("Guid"), BindingSource::Path))
            .returns(TypeDescriptor::complex("Order"));
        assert_eq!(signature_types(&action).count(), 2);
    }
}
