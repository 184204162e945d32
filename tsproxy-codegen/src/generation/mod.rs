//! Generator lookup and output helpers.
//!
//! - [`GeneratorRegistry`] - Generators keyed by their symbolic name
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;
mod registry;

pub use imports::ImportCollector;
pub use registry::{GeneratorRegistry, ProxyScriptGenerator};
