//! Angular/TypeScript client generator for tsproxy.
//!
//! Turns an [`ApiDescriptionModel`](tsproxy_model::ApiDescriptionModel)
//! into a single TypeScript file: one namespace per backend module, one
//! model class per reachable complex type, and one injectable service per
//! controller whose methods call the backend through Angular's `HttpClient`.
//!
//! # Module Organization
//!
//! - [`naming`] - Identifier normalization and parameter expressions
//! - [`type_mapper`] - Backend type to TypeScript type name resolution
//! - [`classes`] - Model class emission
//! - [`url`] - Request URL expressions
//! - [`calls`] - Verb inference, payloads and controller methods
//! - [`generator`] - The registered [`Generator`]

pub mod ast;
pub mod calls;
pub mod classes;
mod code_file;
pub mod generator;
pub mod naming;
pub mod state;
pub mod type_mapper;
pub mod url;

pub use code_file::CodeFile;
pub use generator::{GeneratedScript, Generator};
use tsproxy_codegen::generation::GeneratorRegistry;
use tsproxy_config::ProxyConfig;

/// Name the generator registers under.
pub const NAME: &str = "angular";

/// Register the Angular generator configured from `config`.
pub fn register(registry: &mut GeneratorRegistry, config: &ProxyConfig) {
    registry.register(Box::new(Generator::from_config(config)));
}
