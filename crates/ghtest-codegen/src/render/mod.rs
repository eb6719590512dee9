//! Dialect renderers.
//!
//! Every dialect implements [`Renderer`]; [`renderer_for`] is the only place
//! that maps a [`Dialect`] to a concrete renderer. Output is built as
//! indented text (see [`TextBuilder`]), never as a syntax tree, so each
//! renderer is responsible for emitting well-formed source by construction.

mod mstest;
mod text;
mod xunit;

use std::io::Write;
use std::path::Path;

use ghtest_core::ident::verbatim_literal;
use ghtest_core::{Dialect, Diagnostic, DiscoveryResult, sanitize};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::checks::check_identifiers;
use crate::error::GenerateError;

pub use mstest::MsTestRenderer;
pub use text::TextBuilder;
pub use xunit::XUnitRenderer;

/// Prefix of every generated test class name.
pub const CLASS_PREFIX: &str = "AutoTest_";

/// Turns a discovery result into one complete source document.
pub trait Renderer {
    fn dialect(&self) -> Dialect;

    /// Member names the dialect declares in every test class. A test method
    /// with one of these names would not compile.
    fn reserved_members(&self) -> &'static [&'static str];

    fn render(&self, result: &DiscoveryResult) -> GeneratedDocument;
}

/// Rendered source plus the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub source: String,
    /// Discovery diagnostics followed by identifier checks.
    pub diagnostics: Vec<Diagnostic>,
    /// Set by [`GeneratedDocument::write_to`]: whether the output file
    /// already existed when the write started. Kept even if the write fails.
    pub overwritten: bool,
}

impl GeneratedDocument {
    /// Assemble a document from `source`, carrying over `result`'s
    /// diagnostics and appending identifier checks for `renderer`.
    pub fn new(source: String, result: &DiscoveryResult, renderer: &dyn Renderer) -> Self {
        let mut diagnostics = result.diagnostics.clone();
        diagnostics.extend(check_identifiers(result, renderer.reserved_members()));
        Self {
            source,
            diagnostics,
            overwritten: false,
        }
    }

    /// Atomically write the source to `path`, replacing any existing file.
    ///
    /// The text goes to a temporary file in the same folder which is then
    /// renamed over `path`.
    ///
    /// # Errors
    ///
    /// I/O failures creating, writing, or persisting the temporary file
    /// (including a missing output folder).
    pub fn write_to(&mut self, path: &Path) -> Result<(), GenerateError> {
        let folder = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        self.overwritten = path.exists();
        let mut file = NamedTempFile::new_in(folder)?;
        file.write_all(self.source.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path)?;

        tracing::info!(path = %path.display(), overwritten = self.overwritten, "wrote generated source");
        Ok(())
    }
}

/// Pick the renderer for `dialect`, wrapping output in `namespace`.
#[must_use]
pub fn renderer_for(dialect: Dialect, namespace: &str) -> Box<dyn Renderer> {
    match dialect {
        Dialect::MsTest => Box::new(MsTestRenderer::new(namespace)),
        Dialect::XUnit => Box::new(XUnitRenderer::new(namespace)),
    }
}

/// Test class name for a project file's display name.
#[must_use]
pub fn class_name(display_name: &str) -> String {
    format!("{CLASS_PREFIX}{}", sanitize(display_name))
}

/// Test method name for a grouping label.
#[must_use]
pub fn method_name(label: &str) -> String {
    sanitize(label)
}

fn guid_expr(id: Uuid) -> String {
    format!("new System.Guid(\"{}\")", id.hyphenated())
}

fn path_literal(path: &Path) -> String {
    verbatim_literal(&path.to_string_lossy())
}
