//! Discovery walker: root folders -> project files -> unit-test groupings.
//!
//! Every per-folder and per-file problem becomes a [`Diagnostic`]; only
//! argument validation fails the walk. Documents are opened one at a time
//! and dropped before the next file is opened.

use std::path::{Path, PathBuf};

use ghtest_core::model::is_project_file;
use ghtest_core::{Diagnostic, DiscoveryResult, ProjectFile, TestGrouping};
use ghtest_document::DocumentLoader;
use uuid::Uuid;

use crate::error::GenerateError;
use crate::walk::{WalkMode, build_walker};

/// Finds unit-test groupings below a set of root folders.
pub struct Discoverer<'a, L: DocumentLoader + ?Sized> {
    loader: &'a L,
    unit_test_kind: Uuid,
    walk_mode: WalkMode,
}

impl<'a, L: DocumentLoader + ?Sized> Discoverer<'a, L> {
    /// Objects whose structural kind equals `unit_test_kind` are groupings.
    pub fn new(loader: &'a L, unit_test_kind: Uuid) -> Self {
        Self {
            loader,
            unit_test_kind,
            walk_mode: WalkMode::Raw,
        }
    }

    #[must_use]
    pub fn with_walk_mode(mut self, walk_mode: WalkMode) -> Self {
        self.walk_mode = walk_mode;
        self
    }

    /// Walk `roots` in order and collect every project file that holds at
    /// least one grouping.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidArgument`] if `roots` is empty or contains an
    /// empty path.
    pub fn discover<P: AsRef<Path>>(&self, roots: &[P]) -> Result<DiscoveryResult, GenerateError> {
        if roots.is_empty() {
            return Err(GenerateError::InvalidArgument(
                "at least one root folder is required".into(),
            ));
        }
        if roots.iter().any(|root| root.as_ref().as_os_str().is_empty()) {
            return Err(GenerateError::InvalidArgument(
                "root folder paths must not be empty".into(),
            ));
        }

        let mut result = DiscoveryResult::default();
        for root in roots {
            self.discover_root(root.as_ref(), &mut result);
        }

        tracing::info!(
            files = result.files.len(),
            groupings = result.grouping_count(),
            diagnostics = result.diagnostics.len(),
            "discovery finished"
        );
        Ok(result)
    }

    fn discover_root(&self, root: &Path, result: &mut DiscoveryResult) {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        if !root.is_dir() {
            record(
                result,
                Diagnostic::FolderUnreadable {
                    folder: root,
                    detail: "not a directory or does not exist".into(),
                },
            );
            return;
        }

        let files = self.project_files(&root, result);
        if files.is_empty() {
            record(result, Diagnostic::EmptyFolder { folder: root });
            return;
        }

        for file in files {
            self.visit_file(&file, result);
        }
    }

    fn project_files(&self, root: &Path, result: &mut DiscoveryResult) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in build_walker(root, self.walk_mode) {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && is_project_file(&entry.file_name().to_string_lossy()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => record(
                    result,
                    Diagnostic::FolderUnreadable {
                        folder: root.to_path_buf(),
                        detail: err.to_string(),
                    },
                ),
            }
        }
        tracing::debug!(root = %root.display(), count = files.len(), "project files found");
        files
    }

    fn visit_file(&self, file: &Path, result: &mut DiscoveryResult) {
        let document = match self.loader.open(file) {
            Ok(document) => document,
            Err(err) => {
                record(
                    result,
                    Diagnostic::DocumentOpenFailure {
                        file: file.to_path_buf(),
                        detail: err.to_string(),
                    },
                );
                return;
            }
        };

        let path = document.file_path().to_path_buf();
        let display_name = document.display_name().to_string();
        let groupings: Vec<TestGrouping> = document
            .objects()
            .iter()
            .filter(|object| object.kind == self.unit_test_kind)
            .map(|object| TestGrouping {
                file_path: path.clone(),
                label: object.label.clone(),
                id: object.id,
            })
            .collect();
        drop(document);

        if groupings.is_empty() {
            record(result, Diagnostic::EmptyGroupingSet { file: path });
            return;
        }

        tracing::debug!(file = %path.display(), groupings = groupings.len(), "collected groupings");
        result.files.push(ProjectFile {
            path,
            display_name,
            groupings,
        });
    }
}

fn record(result: &mut DiscoveryResult, diagnostic: Diagnostic) {
    tracing::warn!(%diagnostic, "discovery");
    result.diagnostics.push(diagnostic);
}
