//! Core utilities for the tsproxy client generator.
//!
//! This crate provides the small building blocks shared by
//! the model, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// String utilities
pub use utils::to_camel_case;
