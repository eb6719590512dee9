//! # ghtest-document
//!
//! The narrow seam between ghtest and the visual-programming document model.
//!
//! The rest of the workspace only sees [`DocumentLoader`] ("open path ->
//! handle"), [`Document`] ("enumerate objects") and dropping the handle
//! ("release"). [`GhxLoader`] is the bundled implementation for XML project
//! archives; hosts with access to the native document runtime can provide
//! their own loader.
//!
//! This crate isolates the `quick-xml` dependency from the rest of the
//! workspace.

mod document;
mod error;
pub mod ghx;

pub use document::{Document, DocumentLoader, DocumentObject, LoadedDocument};
pub use error::DocumentError;
pub use ghx::GhxLoader;
