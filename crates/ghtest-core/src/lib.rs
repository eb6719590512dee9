//! # ghtest-core
//!
//! Core types and helpers shared across all ghtest crates:
//! - Identifier sanitizing and indentation for generated source
//! - The discovery data model (project files, test groupings, diagnostics)
//! - The output `Dialect` enum
//! - Cross-cutting error types

pub mod dialect;
pub mod errors;
pub mod ident;
pub mod model;

pub use dialect::Dialect;
pub use errors::CoreError;
pub use ident::{indent, sanitize};
pub use model::{Diagnostic, DiscoveryResult, DuplicateScope, ProjectFile, TestGrouping};
