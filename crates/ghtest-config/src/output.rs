//! Output configuration: where and how the test source is written.

use ghtest_core::Dialect;
use serde::{Deserialize, Serialize};

/// Namespace wrapping every generated test class.
pub const DEFAULT_NAMESPACE: &str = "TenrecGeneratedTests";

/// Base name (without extension) of the generated source file.
pub const DEFAULT_OUTPUT_NAME: &str = "AutoTests";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_name() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Folder receiving the generated file. Empty means "must be given on
    /// the command line".
    #[serde(default)]
    pub folder: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub dialect: Dialect,

    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: String::new(),
            name: default_name(),
            dialect: Dialect::default(),
            namespace: default_namespace(),
        }
    }
}

impl OutputConfig {
    /// Whether an output folder has been configured.
    #[must_use]
    pub fn has_folder(&self) -> bool {
        !self.folder.is_empty()
    }
}
