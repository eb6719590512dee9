//! Generation driver: validate, discover, render, write, log.

use std::fmt;
use std::path::{Path, PathBuf};

use ghtest_config::{ConfigError, DEFAULT_NAMESPACE, DEFAULT_UNIT_TEST_KIND, GhTestConfig};
use ghtest_core::{Diagnostic, Dialect, DiscoveryResult};
use ghtest_document::DocumentLoader;
use serde::Serialize;
use uuid::Uuid;

use crate::discovery::Discoverer;
use crate::error::GenerateError;
use crate::render::renderer_for;
use crate::walk::WalkMode;

/// Settings shared by every run of one [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub namespace: String,
    pub unit_test_kind: Uuid,
    pub walk_mode: WalkMode,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            unit_test_kind: Uuid::parse_str(DEFAULT_UNIT_TEST_KIND).unwrap_or_default(),
            walk_mode: WalkMode::Raw,
        }
    }
}

impl GenerationSettings {
    /// Settings from a loaded configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if the unit-test kind is not a UUID.
    pub fn from_config(config: &GhTestConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            namespace: config.output.namespace.clone(),
            unit_test_kind: config.discovery.unit_test_kind()?,
            walk_mode: WalkMode::from_flag(config.discovery.respect_ignore_files),
        })
    }
}

/// Arguments of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub root_folders: Vec<PathBuf>,
    pub output_folder: PathBuf,
    /// File name without extension.
    pub output_name: String,
    pub dialect: Dialect,
}

impl GenerateRequest {
    /// Reject requests that must not reach the file system.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidArgument`] for an empty root list, an empty
    /// root path, an empty output folder, or an empty output name.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.root_folders.is_empty() {
            return Err(GenerateError::InvalidArgument(
                "at least one root folder is required".into(),
            ));
        }
        if self
            .root_folders
            .iter()
            .any(|root| root.as_os_str().is_empty())
        {
            return Err(GenerateError::InvalidArgument(
                "root folder paths must not be empty".into(),
            ));
        }
        if self.output_folder.as_os_str().is_empty() {
            return Err(GenerateError::InvalidArgument(
                "output folder must not be empty".into(),
            ));
        }
        if self.output_name.trim().is_empty() {
            return Err(GenerateError::InvalidArgument(
                "output file name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `<output_folder>/<output_name>.<extension>`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_folder.join(format!(
            "{}.{}",
            self.output_name,
            self.dialect.source_extension()
        ))
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Created(PathBuf),
    Overwritten(PathBuf),
    /// The output file may be missing or stale. `existed` tells whether a
    /// previous file was at the output path when the write started.
    Failed { detail: String, existed: bool },
}

/// The result of a run: every diagnostic plus the outcome.
///
/// `Display` renders the human-readable log, one line per diagnostic
/// followed by the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationLog {
    pub diagnostics: Vec<Diagnostic>,
    pub outcome: RunOutcome,
}

impl GenerationLog {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self.outcome, RunOutcome::Failed { .. })
    }

    /// The written file, if any.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        match &self.outcome {
            RunOutcome::Created(path) | RunOutcome::Overwritten(path) => Some(path),
            RunOutcome::Failed { .. } => None,
        }
    }
}

impl fmt::Display for GenerationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        match &self.outcome {
            RunOutcome::Created(_) => write!(f, "File successfully created."),
            RunOutcome::Overwritten(_) => write!(f, "File successfully overwritten."),
            RunOutcome::Failed { detail, existed } => {
                writeln!(f, "EXCEPTION: {detail}")?;
                let previous = if *existed { "a previous" } else { "no previous" };
                write!(
                    f,
                    "File was not fully generated; {previous} file existed at the output path."
                )
            }
        }
    }
}

/// Runs discovery and rendering with one document loader.
pub struct Generator<L: DocumentLoader> {
    loader: L,
    settings: GenerationSettings,
}

impl<L: DocumentLoader> Generator<L> {
    pub const fn new(loader: L, settings: GenerationSettings) -> Self {
        Self { loader, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Discovery only.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidArgument`] for an empty root list or path.
    pub fn discover<P: AsRef<Path>>(&self, roots: &[P]) -> Result<DiscoveryResult, GenerateError> {
        Discoverer::new(&self.loader, self.settings.unit_test_kind)
            .with_walk_mode(self.settings.walk_mode)
            .discover(roots)
    }

    /// Generate one source file for `request`.
    ///
    /// Write failures do not return `Err`; they end the run with
    /// [`RunOutcome::Failed`] and are reported in the log.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidArgument`] when the request is invalid. No
    /// file is written in that case.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerationLog, GenerateError> {
        request.validate()?;

        let result = self.discover(&request.root_folders)?;
        let renderer = renderer_for(request.dialect, &self.settings.namespace);
        let mut document = renderer.render(&result);

        let path = request.output_path();
        let outcome = match document.write_to(&path) {
            Ok(()) if document.overwritten => RunOutcome::Overwritten(path),
            Ok(()) => RunOutcome::Created(path),
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "failed to write generated source");
                RunOutcome::Failed {
                    detail: format!("{error} [{error:?}]"),
                    existed: document.overwritten,
                }
            }
        };

        Ok(GenerationLog {
            diagnostics: document.diagnostics,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(roots: Vec<PathBuf>) -> GenerateRequest {
        GenerateRequest {
            root_folders: roots,
            output_folder: PathBuf::from("/out"),
            output_name: "AutoTests".into(),
            dialect: Dialect::MsTest,
        }
    }

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            request(vec![PathBuf::from("/in")]).output_path(),
            PathBuf::from("/out/AutoTests.cs")
        );
    }

    #[test]
    fn validate_rejects_empty_arguments() {
        assert!(request(Vec::new()).validate().is_err());
        assert!(request(vec![PathBuf::new()]).validate().is_err());

        let mut req = request(vec![PathBuf::from("/in")]);
        req.output_folder = PathBuf::new();
        assert!(matches!(
            req.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));

        let mut req = request(vec![PathBuf::from("/in")]);
        req.output_name = " ".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = GhTestConfig::default();
        config.output.namespace = "Suite.Tests".into();
        config.discovery.respect_ignore_files = true;

        let settings = GenerationSettings::from_config(&config).unwrap();
        assert_eq!(settings.namespace, "Suite.Tests");
        assert_eq!(settings.walk_mode, WalkMode::RespectIgnoreFiles);
        assert_eq!(settings.unit_test_kind, GenerationSettings::default().unit_test_kind);
    }

    #[test]
    fn log_lists_diagnostics_then_outcome() {
        let log = GenerationLog {
            diagnostics: vec![Diagnostic::EmptyFolder {
                folder: PathBuf::from("/empty"),
            }],
            outcome: RunOutcome::Created(PathBuf::from("/out/AutoTests.cs")),
        };
        assert!(log.is_success());
        assert_eq!(
            log.to_string(),
            "/empty does not contain any readable format (.gh|.ghx)\nFile successfully created."
        );
    }

    #[test]
    fn failed_log_reports_exception() {
        let log = GenerationLog {
            diagnostics: Vec::new(),
            outcome: RunOutcome::Failed {
                detail: "disk full".into(),
                existed: true,
            },
        };
        assert!(!log.is_success());
        assert_eq!(log.output_path(), None);
        assert_eq!(
            log.to_string(),
            "EXCEPTION: disk full\nFile was not fully generated; a previous file existed at the output path."
        );
    }
}
