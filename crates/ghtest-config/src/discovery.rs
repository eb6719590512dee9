//! Discovery configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

/// Placeholder component id for the unit-test group object.
///
/// This value is not the id of any shipped plugin. Set
/// `discovery.unit_test_kind` (or `GHTEST_DISCOVERY__UNIT_TEST_KIND`) to the
/// group component id your host plugin registers, otherwise no unit-test
/// groups are found.
pub const DEFAULT_UNIT_TEST_KIND: &str = "a1e8a0f4-27c7-4c4e-9c1b-3b7a52f9d6e2";

fn default_unit_test_kind() -> String {
    DEFAULT_UNIT_TEST_KIND.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Structural kind (component GUID) that marks a unit-test grouping.
    #[serde(default = "default_unit_test_kind")]
    pub unit_test_kind: String,

    /// Honor `.gitignore`/`.ignore` files and skip hidden entries while
    /// walking root folders. Off by default: every file is visited.
    #[serde(default)]
    pub respect_ignore_files: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            unit_test_kind: default_unit_test_kind(),
            respect_ignore_files: false,
        }
    }
}

impl DiscoveryConfig {
    /// Parse [`Self::unit_test_kind`] into a UUID.
    pub fn unit_test_kind(&self) -> Result<Uuid, ConfigError> {
        Uuid::parse_str(self.unit_test_kind.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "discovery.unit_test_kind".into(),
            reason: e.to_string(),
        })
    }
}
