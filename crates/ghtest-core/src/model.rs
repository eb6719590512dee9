//! Discovery data model.
//!
//! A generation run builds one [`DiscoveryResult`] and never mutates it once
//! rendering starts. Document handles are not part of the model: every
//! [`ProjectFile`] holds only the strings and ids captured while its document
//! was open.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// File extensions recognized as project files, matched as case-sensitive
/// suffixes.
pub const PROJECT_EXTENSIONS: [&str; 2] = [".gh", ".ghx"];

/// Returns `true` if `file_name` ends with one of [`PROJECT_EXTENSIONS`].
#[must_use]
pub fn is_project_file(file_name: &str) -> bool {
    PROJECT_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}

/// One tagged unit-test grouping inside a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestGrouping {
    pub file_path: PathBuf,
    /// Human label; may contain spaces and symbols.
    pub label: String,
    pub id: Uuid,
}

/// A project file that contained at least one test grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub path: PathBuf,
    pub display_name: String,
    /// Non-empty, in the document's native object order.
    pub groupings: Vec<TestGrouping>,
}

/// What kind of generated name collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScope {
    /// Two project files produce the same test class name.
    Class,
    /// Two groupings in one project file produce the same method name.
    Method,
}

impl DuplicateScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

/// A non-fatal problem recorded for one folder, file, or generated name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A root folder held no project files.
    EmptyFolder { folder: PathBuf },
    /// A root folder (or an entry below it) could not be read.
    FolderUnreadable { folder: PathBuf, detail: String },
    /// The document loader could not open a project file.
    DocumentOpenFailure { file: PathBuf, detail: String },
    /// A project file opened fine but held no unit-test groupings.
    EmptyGroupingSet { file: PathBuf },
    /// Two generated names collide; both were still emitted.
    DuplicateIdentifier {
        scope: DuplicateScope,
        identifier: String,
        sources: Vec<String>,
    },
    /// A sanitized name is still not a legal identifier.
    InvalidIdentifier { identifier: String, label: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFolder { folder } => write!(
                f,
                "{} does not contain any readable format (.gh|.ghx)",
                folder.display()
            ),
            Self::FolderUnreadable { folder, detail } => {
                write!(f, "Folder {} could not be read: {detail}", folder.display())
            }
            Self::DocumentOpenFailure { file, detail } => {
                write!(f, "File {} failed to open: {detail}", file.display())
            }
            Self::EmptyGroupingSet { file } => write!(
                f,
                "File {} does not contain any unit test group; skipped.",
                file.display()
            ),
            Self::DuplicateIdentifier {
                scope,
                identifier,
                sources,
            } => write!(
                f,
                "DuplicateIdentifier: {} name '{identifier}' is generated more than once (from: {})",
                scope.as_str(),
                sources.join(", ")
            ),
            Self::InvalidIdentifier { identifier, label } => write!(
                f,
                "InvalidIdentifier: '{identifier}' (from '{label}') is not a valid identifier"
            ),
        }
    }
}

/// Output of the discovery walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub files: Vec<ProjectFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiscoveryResult {
    #[must_use]
    pub fn grouping_count(&self) -> usize {
        self.files.iter().map(|f| f.groupings.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
