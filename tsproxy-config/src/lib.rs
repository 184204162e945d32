//! Configuration and model loading for the tsproxy client generator.
//!
//! - [`ProxyConfig`] is the parsed `tsproxy.toml` generator configuration.
//! - [`ModelFile`] loads the JSON API description consumed by the generator.
//!
//! Both report failures as [`Error`], a [`miette::Diagnostic`] that points
//! at the offending location in the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{
    AngularConfig, DEFAULT_CONFIG_FILE, GeneratorConfig, Locale, PromiseStyle, ProxyConfig,
};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigFile, ModelFile};
