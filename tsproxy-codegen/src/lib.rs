//! Shared code generation utilities for the tsproxy client generator.
//!
//! This crate provides the language-agnostic pieces used by target
//! generators such as `tsproxy-codegen-angular`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Generator registry and import collection
//! - [`pipeline`] - Validate and analyze phases with lints and diagnostics
//! - [`schema`] - Model traversal and pre-computed analysis

pub mod builder;
mod error;
pub mod generation;
pub mod pipeline;
pub mod schema;

pub use error::GenerateError;
