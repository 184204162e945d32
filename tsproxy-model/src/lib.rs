//! Backend API description model for the tsproxy client generator.
//!
//! The model is supplied fully resolved by the host: modules contain
//! controllers, controllers contain actions, and actions describe their
//! parameters and return type with [`TypeDescriptor`] values.
//!
//! # Architecture
//!
//! ```text
//! api.json (JSON) → tsproxy-config (loading) → tsproxy-model → codegen
//! ```
//!
//! Complex (class) types live in a single table on [`ApiDescriptionModel`]
//! keyed by their identity and are referenced with
//! [`TypeDescriptor::Complex`], which keeps self-referential and mutually
//! recursive type graphs representable.
//!
//! All maps preserve insertion order so that generated output follows the
//! order in which the description was supplied.

mod api;
mod types;

pub use api::{
    ActionDescriptor, ApiDescriptionModel, BindingSource, ControllerDescriptor, ModuleDescriptor,
    ParameterDescriptor,
};
pub use types::{ComplexType, PropertyDescriptor, TypeDescriptor, strip_generic_arity};
