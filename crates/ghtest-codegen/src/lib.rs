//! # ghtest-codegen
//!
//! Turns folders of project files into a compilable C# test suite.
//!
//! A run has three stages:
//! - [`Discoverer`] walks root folders, opens each project file through a
//!   [`DocumentLoader`](ghtest_document::DocumentLoader), and collects the
//!   unit-test groupings it contains.
//! - A [`Renderer`] (one per [`Dialect`](ghtest_core::Dialect)) turns the
//!   discovery result into source text.
//! - [`Generator`] validates arguments, drives both stages, writes the file
//!   atomically, and returns a [`GenerationLog`].

pub mod checks;
mod discovery;
mod error;
mod generate;
pub mod render;
pub mod walk;

pub use discovery::Discoverer;
pub use error::GenerateError;
pub use generate::{GenerateRequest, GenerationLog, GenerationSettings, Generator, RunOutcome};
pub use render::{GeneratedDocument, MsTestRenderer, Renderer, XUnitRenderer, renderer_for};
pub use walk::WalkMode;
