//! TypeScript declarations built before rendering.
//!
//! Generation first decides what to emit as plain values from this module,
//! then renders them through [`tsproxy_codegen::builder::Renderable`].

mod chain;
mod class;
mod controller;
mod imports;
mod method;
mod namespace;
mod objects;

pub use chain::MethodChain;
pub use class::{ClassDecl, FieldDecl};
pub use controller::ControllerDecl;
pub use imports::Import;
pub use method::{MethodDecl, ParamDecl};
pub use namespace::{NamespaceDecl, NamespaceItem};
pub use objects::JsObject;
